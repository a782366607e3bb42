//! The fixed, enumerated set of diagnostic codes the compiler core can
//! produce. Codes are namespaced by stage: `SYN` (lexer/parser), `SEM`
//! (semantic analyzer). `RUN` codes are never produced by this crate — they
//! are reserved for the execution sandbox (see [`crate::proto`] users
//! downstream) and are listed here only so the wire format has one
//! authoritative enumeration.
//!
//! Tests assert against these variants (or their [`DiagnosticCode::as_str`]
//! form), never against message text, so message wording can be improved
//! freely.

use serde::{Deserialize, Serialize};

/// A stable, namespaced diagnostic code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DiagnosticCode {
    // ---- Lexical (SYN001-SYN009) ----
    /// Keyword spelled in a case other than uppercase.
    Syn001,
    /// A byte that starts no valid token.
    Syn002,
    /// String literal not closed before newline/EOF.
    Syn008,
    /// Character literal not closed before newline/EOF.
    Syn009,

    // ---- Syntactic (SYN010-SYN076) ----
    /// Statement dispatch saw neither a keyword nor an identifier.
    Syn004,
    Syn010,
    Syn011,
    Syn012,
    Syn013,
    Syn014,
    Syn015,
    Syn016,
    Syn017,
    /// Missing `ENDIF`.
    Syn018,
    Syn019,
    Syn020,
    Syn021,
    Syn022,
    /// CASE clause body did not start on the same line as `:`/`OTHERWISE`.
    Syn023,
    Syn024,
    Syn025,
    Syn026,
    /// Missing `NEXT` closing a `FOR` loop.
    Syn027,
    /// `NEXT` identifier does not match the `FOR` loop's iterator.
    Syn028,
    Syn029,
    Syn030,
    /// Missing `ENDWHILE`.
    Syn031,
    Syn032,
    /// Missing `ENDPROCEDURE`.
    Syn033,
    /// Missing `ENDFUNCTION`.
    Syn034,
    Syn035,
    Syn036,
    Syn037,
    Syn038,
    Syn039,
    Syn040,
    Syn041,
    Syn042,
    Syn043,
    Syn044,
    Syn045,
    /// Missing `ENDCASE`.
    Syn046,

    // ---- Semantic ----
    /// Duplicate top-level procedure/function name.
    Sem001,
    /// Duplicate name defined twice within the same scope.
    Sem002,
    /// Assignment value type does not feed the target's type.
    Sem003,
    /// `IF` condition is not BOOLEAN.
    Sem004,
    /// `FOR` iterator is not an already-declared symbol.
    Sem005,
    /// `FOR` iterator is not INTEGER.
    Sem006,
    /// `FOR` bound or STEP expression is not numeric.
    Sem007,
    /// `UNTIL` condition is not BOOLEAN.
    Sem008,
    /// `WHILE` condition is not BOOLEAN.
    Sem009,
    /// Duplicate parameter name in a routine signature.
    Sem010,
    /// Function body contains no `RETURN` statement.
    Sem011,
    /// `CALL` target is not a known procedure.
    Sem012,
    /// `RETURN` used outside a function body.
    Sem013,
    /// `RETURN` value type does not feed the declared return type.
    Sem014,
    /// `READFILE` on a handle currently open for `WRITE`.
    Sem015,
    /// `WRITEFILE` on a handle currently open for `READ`.
    Sem016,
    /// Wrong number of call arguments.
    Sem017,
    /// Call argument type does not feed the parameter type.
    Sem018,
    /// Identifier used but never declared.
    Sem019,
    /// `NOT` operand is not BOOLEAN.
    Sem020,
    /// Unary `-` operand is not numeric.
    Sem021,
    /// Arithmetic operand is not numeric.
    Sem022,
    /// `AND`/`OR` operand is not BOOLEAN.
    Sem023,
    /// Call target is neither a built-in nor a known user routine.
    Sem024,
    /// Assignment or `INPUT` targeting a `CONSTANT`.
    Sem025,
    /// File identifier already open in a conflicting mode.
    Sem026,
    /// Array access has the wrong number of index dimensions.
    Sem027,
    /// Array index expression is not INTEGER.
    Sem028,

    // ---- Runtime (sandbox-produced; never emitted by this crate) ----
    /// Traceback distilled to its last two lines.
    Run001,
    /// Execution exceeded the sandbox's wall-clock budget.
    Run408,
    /// The sandbox itself failed to initialize in time.
    Run409,
    /// Sandbox crashed for an unclassified reason.
    Run500,
}

impl DiagnosticCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Syn001 => "SYN001",
            Self::Syn002 => "SYN002",
            Self::Syn004 => "SYN004",
            Self::Syn008 => "SYN008",
            Self::Syn009 => "SYN009",
            Self::Syn010 => "SYN010",
            Self::Syn011 => "SYN011",
            Self::Syn012 => "SYN012",
            Self::Syn013 => "SYN013",
            Self::Syn014 => "SYN014",
            Self::Syn015 => "SYN015",
            Self::Syn016 => "SYN016",
            Self::Syn017 => "SYN017",
            Self::Syn018 => "SYN018",
            Self::Syn019 => "SYN019",
            Self::Syn020 => "SYN020",
            Self::Syn021 => "SYN021",
            Self::Syn022 => "SYN022",
            Self::Syn023 => "SYN023",
            Self::Syn024 => "SYN024",
            Self::Syn025 => "SYN025",
            Self::Syn026 => "SYN026",
            Self::Syn027 => "SYN027",
            Self::Syn028 => "SYN028",
            Self::Syn029 => "SYN029",
            Self::Syn030 => "SYN030",
            Self::Syn031 => "SYN031",
            Self::Syn032 => "SYN032",
            Self::Syn033 => "SYN033",
            Self::Syn034 => "SYN034",
            Self::Syn035 => "SYN035",
            Self::Syn036 => "SYN036",
            Self::Syn037 => "SYN037",
            Self::Syn038 => "SYN038",
            Self::Syn039 => "SYN039",
            Self::Syn040 => "SYN040",
            Self::Syn041 => "SYN041",
            Self::Syn042 => "SYN042",
            Self::Syn043 => "SYN043",
            Self::Syn044 => "SYN044",
            Self::Syn045 => "SYN045",
            Self::Syn046 => "SYN046",
            Self::Sem001 => "SEM001",
            Self::Sem002 => "SEM002",
            Self::Sem003 => "SEM003",
            Self::Sem004 => "SEM004",
            Self::Sem005 => "SEM005",
            Self::Sem006 => "SEM006",
            Self::Sem007 => "SEM007",
            Self::Sem008 => "SEM008",
            Self::Sem009 => "SEM009",
            Self::Sem010 => "SEM010",
            Self::Sem011 => "SEM011",
            Self::Sem012 => "SEM012",
            Self::Sem013 => "SEM013",
            Self::Sem014 => "SEM014",
            Self::Sem015 => "SEM015",
            Self::Sem016 => "SEM016",
            Self::Sem017 => "SEM017",
            Self::Sem018 => "SEM018",
            Self::Sem019 => "SEM019",
            Self::Sem020 => "SEM020",
            Self::Sem021 => "SEM021",
            Self::Sem022 => "SEM022",
            Self::Sem023 => "SEM023",
            Self::Sem024 => "SEM024",
            Self::Sem025 => "SEM025",
            Self::Sem026 => "SEM026",
            Self::Sem027 => "SEM027",
            Self::Sem028 => "SEM028",
            Self::Run001 => "RUN001",
            Self::Run408 => "RUN408",
            Self::Run409 => "RUN409",
            Self::Run500 => "RUN500",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Some(match code {
            "SYN001" => Self::Syn001,
            "SYN002" => Self::Syn002,
            "SYN004" => Self::Syn004,
            "SYN008" => Self::Syn008,
            "SYN009" => Self::Syn009,
            "SYN010" => Self::Syn010,
            "SYN011" => Self::Syn011,
            "SYN012" => Self::Syn012,
            "SYN013" => Self::Syn013,
            "SYN014" => Self::Syn014,
            "SYN015" => Self::Syn015,
            "SYN016" => Self::Syn016,
            "SYN017" => Self::Syn017,
            "SYN018" => Self::Syn018,
            "SYN019" => Self::Syn019,
            "SYN020" => Self::Syn020,
            "SYN021" => Self::Syn021,
            "SYN022" => Self::Syn022,
            "SYN023" => Self::Syn023,
            "SYN024" => Self::Syn024,
            "SYN025" => Self::Syn025,
            "SYN026" => Self::Syn026,
            "SYN027" => Self::Syn027,
            "SYN028" => Self::Syn028,
            "SYN029" => Self::Syn029,
            "SYN030" => Self::Syn030,
            "SYN031" => Self::Syn031,
            "SYN032" => Self::Syn032,
            "SYN033" => Self::Syn033,
            "SYN034" => Self::Syn034,
            "SYN035" => Self::Syn035,
            "SYN036" => Self::Syn036,
            "SYN037" => Self::Syn037,
            "SYN038" => Self::Syn038,
            "SYN039" => Self::Syn039,
            "SYN040" => Self::Syn040,
            "SYN041" => Self::Syn041,
            "SYN042" => Self::Syn042,
            "SYN043" => Self::Syn043,
            "SYN044" => Self::Syn044,
            "SYN045" => Self::Syn045,
            "SYN046" => Self::Syn046,
            "SEM001" => Self::Sem001,
            "SEM002" => Self::Sem002,
            "SEM003" => Self::Sem003,
            "SEM004" => Self::Sem004,
            "SEM005" => Self::Sem005,
            "SEM006" => Self::Sem006,
            "SEM007" => Self::Sem007,
            "SEM008" => Self::Sem008,
            "SEM009" => Self::Sem009,
            "SEM010" => Self::Sem010,
            "SEM011" => Self::Sem011,
            "SEM012" => Self::Sem012,
            "SEM013" => Self::Sem013,
            "SEM014" => Self::Sem014,
            "SEM015" => Self::Sem015,
            "SEM016" => Self::Sem016,
            "SEM017" => Self::Sem017,
            "SEM018" => Self::Sem018,
            "SEM019" => Self::Sem019,
            "SEM020" => Self::Sem020,
            "SEM021" => Self::Sem021,
            "SEM022" => Self::Sem022,
            "SEM023" => Self::Sem023,
            "SEM024" => Self::Sem024,
            "SEM025" => Self::Sem025,
            "SEM026" => Self::Sem026,
            "SEM027" => Self::Sem027,
            "SEM028" => Self::Sem028,
            "RUN001" => Self::Run001,
            "RUN408" => Self::Run408,
            "RUN409" => Self::Run409,
            "RUN500" => Self::Run500,
            _ => return None,
        })
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DiagnosticCode> for String {
    fn from(code: DiagnosticCode) -> String {
        code.as_str().to_owned()
    }
}

impl TryFrom<String> for DiagnosticCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or(format!("unknown diagnostic code {value:?}"))
    }
}
