//! The fixed Python runtime prelude (§4.4, §6). It is emitted verbatim
//! ahead of every generated program and is not itself compiled by this
//! crate — changing it changes the semantics every emitted program relies
//! on, so treat edits here the way you'd treat an ABI change.
//!
//! `__stdin_lines`/`__virtual_files` are the two names the sandbox boundary
//! (§6 "Run request") is expected to overwrite in the exec globals before
//! invoking the trailing `__main__()` call; `__stdout_lines`/
//! `__virtual_files` are read back out afterward. This crate only emits the
//! contract; populating and harvesting those globals is the sandbox's job.

pub const PRELUDE: &str = r#"import random

__rng = random.Random()
__stdin_lines = []
__stdin_index = 0
__stdout_lines = []
__virtual_files = {}
__open_handles = {}


class __PseudoArray:
    def __init__(self, dimensions, default):
        self.__dimensions = dimensions
        self.__default = default
        sizes = [hi - lo + 1 for (lo, hi) in dimensions]
        if len(sizes) == 1:
            self.__data = [default for _ in range(sizes[0])]
        else:
            self.__data = [[default for _ in range(sizes[1])] for _ in range(sizes[0])]

    def __normalize(self, key):
        indices = key if isinstance(key, tuple) else (key,)
        if len(indices) != len(self.__dimensions):
            raise IndexError("wrong number of array dimensions")
        offsets = []
        for value, (lo, hi) in zip(indices, self.__dimensions):
            if value < lo or value > hi:
                raise IndexError("array index out of bounds")
            offsets.append(value - lo)
        return offsets

    def __getitem__(self, key):
        offsets = self.__normalize(key)
        if len(offsets) == 1:
            return self.__data[offsets[0]]
        return self.__data[offsets[0]][offsets[1]]

    def __setitem__(self, key, value):
        offsets = self.__normalize(key)
        if len(offsets) == 1:
            self.__data[offsets[0]] = value
        else:
            self.__data[offsets[0]][offsets[1]] = value


def __inclusive_range(start, end, step):
    if step == 0:
        raise RuntimeError("FOR loop STEP must not be zero")
    value = start
    if step > 0:
        while value <= end:
            yield value
            value += step
    else:
        while value >= end:
            yield value
            value += step


def __coerce_input(raw, type_name):
    if type_name == "INTEGER":
        return int(raw)
    if type_name == "REAL":
        return float(raw)
    if type_name == "BOOLEAN":
        return raw.strip().upper() == "TRUE"
    if type_name == "CHAR":
        return raw[0] if raw else ""
    return raw


def __input():
    global __stdin_index
    if __stdin_index >= len(__stdin_lines):
        raise RuntimeError("no more input available")
    line = __stdin_lines[__stdin_index]
    __stdin_index += 1
    return line


def __output(*values):
    __stdout_lines.append("".join(str(v) for v in values))


def __open_file(name, mode):
    key = str(name)
    __virtual_files.setdefault(key, [])
    __open_handles[key] = {"mode": mode, "position": 0}


def __read_file(name):
    key = str(name)
    handle = __open_handles.get(key)
    if handle is None or handle["mode"] != "READ":
        raise RuntimeError(f"file '{key}' is not open for reading")
    lines = __virtual_files.get(key, [])
    if handle["position"] >= len(lines):
        raise RuntimeError(f"end of file '{key}'")
    line = lines[handle["position"]]
    handle["position"] += 1
    return line


def __write_file(name, value):
    key = str(name)
    handle = __open_handles.get(key)
    if handle is None or handle["mode"] != "WRITE":
        raise RuntimeError(f"file '{key}' is not open for writing")
    __virtual_files.setdefault(key, []).append(str(value))


def __close_file(name):
    __open_handles.pop(str(name), None)


def __div(a, b):
    return int(a) // int(b)


def __mod(a, b):
    return int(a) % int(b)


def __length(s):
    return len(s)


def __lcase(s):
    return s.lower()


def __ucase(s):
    return s.upper()


def __substring(s, start, length):
    start = max(1, int(start))
    return s[start - 1:start - 1 + int(length)]


def __round(value, places):
    return round(float(value), int(places))


def __random():
    return __rng.random()

"#;
