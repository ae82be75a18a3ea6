use std::fmt;

/// Free variable standing for the acting thread in every emitted formula.
/// The generator never binds it; quantification is left to the surrounding
/// specification.
pub const THREAD_VAR: &str = "T";

/// A PC literal as it appears inside an invariant clause
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Literal {
    Pos(&'static str),
    Neg(&'static str),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pos(pc) => write!(f, "{}({})", pc, THREAD_VAR),
            Self::Neg(pc) => write!(f, "~{}({})", pc, THREAD_VAR),
        }
    }
}

/// One line of generated specification text
pub enum Formula {
    /// Initial-state assignment `pc(T) := true|false;`
    Init(&'static str, bool),
    /// Disjunctive state invariant over PC literals
    Invariant(Vec<Literal>),
    /// Frame condition tying a PC to its l2s saved value on unscheduled steps
    Frame(&'static str),
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(pc, value) => write!(f, "{}({}) := {};", pc, THREAD_VAR, value),
            Self::Invariant(literals) => {
                let clauses: Vec<String> = literals.iter().map(|lit| lit.to_string()).collect();
                write!(f, "invariant {}", clauses.join(" | "))
            }
            Self::Frame(pc) => {
                let t = THREAD_VAR;
                write!(
                    f,
                    "invariant l2s_saved & ($l2s_w {t}. scheduled({t}))({t}) -> (($l2s_s {t}. {pc}({t}))({t}) <-> {pc}({t}))",
                )
            }
        }
    }
}

#[test]
fn test_literal_display() {
    assert_eq!(Literal::Pos("lock_acq").to_string(), "lock_acq(T)");
    assert_eq!(Literal::Neg("futex_wait").to_string(), "~futex_wait(T)");
}

#[test]
fn test_init_display() {
    assert_eq!(
        Formula::Init("lock_acq", true).to_string(),
        "lock_acq(T) := true;"
    );
    assert_eq!(
        Formula::Init("finished", false).to_string(),
        "finished(T) := false;"
    );
}

#[test]
fn test_invariant_display() {
    let f = Formula::Invariant(vec![Literal::Neg("lock_acq"), Literal::Neg("finished")]);
    assert_eq!(f.to_string(), "invariant ~lock_acq(T) | ~finished(T)");
}

#[test]
fn test_frame_display() {
    assert_eq!(
        Formula::Frame("kernel_wait").to_string(),
        "invariant l2s_saved & ($l2s_w T. scheduled(T))(T) -> (($l2s_s T. kernel_wait(T))(T) <-> kernel_wait(T))"
    );
}
