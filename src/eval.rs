use std::collections::HashSet;

/// Cycle guard for one top-level `compute` invocation.
///
/// Every component enters the set for the duration of its own `compute`
/// frame and leaves on exit, so a diamond-shaped fan-in may query the same
/// upstream component twice while any path that loops back into a frame
/// still on the stack resolves to `Undefined` instead of recursing. The
/// membership test runs against a link's stored peer name, before the peer
/// is locked, which is what keeps cyclic netlists from deadlocking.
///
/// An `Evaluation` is scoped to a single top-level call; callers create a
/// fresh one per query.
#[derive(Debug, Default)]
pub struct Evaluation {
    visiting: HashSet<String>,
}

impl Evaluation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the guard with the component whose `simulate` is driving this
    /// evaluation, so feedback into the simulating component short-circuits.
    pub fn rooted_at(name: &str) -> Self {
        let mut eval = Self::new();
        eval.visiting.insert(name.to_string());
        eval
    }

    /// Marks `name` as being resolved. Returns false if it already is,
    /// in which case the caller must yield `Undefined` instead of recursing.
    pub fn enter(&mut self, name: &str) -> bool {
        self.visiting.insert(name.to_string())
    }

    pub fn leave(&mut self, name: &str) {
        self.visiting.remove(name);
    }

    pub fn is_visiting(&self, name: &str) -> bool {
        self.visiting.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_is_exclusive() {
        let mut eval = Evaluation::new();
        assert!(eval.enter("a"));
        assert!(!eval.enter("a"));
        assert!(eval.enter("b"));
    }

    #[test]
    fn test_leave_allows_revisit() {
        let mut eval = Evaluation::new();
        assert!(eval.enter("a"));
        eval.leave("a");
        assert!(!eval.is_visiting("a"));
        assert!(eval.enter("a"));
    }

    #[test]
    fn test_rooted_at_marks_root() {
        let mut eval = Evaluation::rooted_at("root");
        assert!(eval.is_visiting("root"));
        assert!(!eval.enter("root"));
    }
}
