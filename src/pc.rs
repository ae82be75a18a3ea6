use crate::formula::{Formula, Literal};

/// Ordered program counter labels of a single thread
pub struct PcSequence {
    labels: Vec<&'static str>,
}

impl PcSequence {
    /// Create a sequence from labels in execution order
    // Note: labels are not de-duplicated; a duplicate yields redundant or
    // contradictory exclusion invariants
    pub fn new(labels: Vec<&'static str>) -> Self {
        PcSequence { labels }
    }

    /// PCs of one thread acquiring and releasing a futex-based mutex
    pub fn futex_lock_unlock() -> Self {
        Self::new(vec![
            "lock_acq",
            "lock_set_wait",
            "futex_wait",
            "kernel_wait",
            "lock_acq2",
            "unlock_sub",
            "unlock_store",
            "futex_wake",
            "finished",
        ])
    }

    /// Labels in execution order; a label's ordinal is its index here
    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    /// Initial-state assignments: the thread starts at its first PC,
    /// every other PC is false
    pub fn init_formulas(&self) -> Vec<Formula> {
        self.labels
            .iter()
            .enumerate()
            .map(|(ordinal, &pc)| Formula::Init(pc, ordinal == 0))
            .collect()
    }

    /// One-hot invariants over the PCs: a totality disjunction (the thread is
    /// always at some PC) followed by one pairwise exclusion per ordinal pair
    /// i < j (it is never at two PCs at once)
    pub fn basic_invariants(&self) -> Vec<Formula> {
        let mut formulas = vec![Formula::Invariant(
            self.labels.iter().map(|&pc| Literal::Pos(pc)).collect(),
        )];
        for i in 0..self.labels.len() {
            for j in (i + 1)..self.labels.len() {
                formulas.push(Formula::Invariant(vec![
                    Literal::Neg(self.labels[i]),
                    Literal::Neg(self.labels[j]),
                ]));
            }
        }
        formulas
    }

    /// Frame conditions for the l2s liveness-to-safety reduction: while a
    /// saved snapshot is active, a step that does not schedule the thread
    /// leaves its PC equal to the saved value.
    ///
    /// `scheduled` and the `l2s_s`/`l2s_w` operators are defined by the
    /// surrounding specification, not by this generator.
    pub fn stutter_frames(&self) -> Vec<Formula> {
        self.labels.iter().map(|&pc| Formula::Frame(pc)).collect()
    }

    /// Render the full fragment: init assignments, one-hot invariants, and
    /// stutter frames, as three labeled blocks in fixed order
    pub fn to_spec_string(&self) -> String {
        let mut s = String::from("# init: \n");
        for f in self.init_formulas() {
            s.push_str(&format!("{}\n", f));
        }
        s.push_str("\n# basic invariants\n");
        for f in self.basic_invariants() {
            s.push_str(&format!("{}\n", f));
        }
        s.push_str("\n# pcs don't change if a thread isn't scheduled\n");
        for f in self.stutter_frames() {
            s.push_str(&format!("{}\n", f));
        }
        s
    }
}
