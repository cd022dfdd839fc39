use std::mem;

/// Callbacks run exactly once when the UI reports ready.
///
/// Hooks run in registration order. Firing a second time is a no-op, and
/// hooks registered after the first firing never run.
pub struct ReadyHooks<T> {
    hooks: Vec<Box<dyn FnOnce(&mut T)>>,
    fired: bool,
}

impl<T> ReadyHooks<T> {
    pub fn new() -> Self {
        Self {
            hooks: Vec::new(),
            fired: false,
        }
    }

    /// Register a hook. Ignored once the ready signal has already fired.
    pub fn register<F>(&mut self, hook: F)
    where
        F: FnOnce(&mut T) + 'static,
    {
        if !self.fired {
            self.hooks.push(Box::new(hook));
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Mark as fired and hand back the registered hooks. Returns `None` on
    /// every call after the first. The caller runs the hooks itself, which
    /// keeps the target free for `&mut` access while they execute.
    pub fn take_hooks(&mut self) -> Option<Vec<Box<dyn FnOnce(&mut T)>>> {
        if self.fired {
            return None;
        }
        self.fired = true;
        Some(mem::take(&mut self.hooks))
    }
}

impl<T> Default for ReadyHooks<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Target {
        log: Vec<&'static str>,
    }

    fn fire(hooks: &mut ReadyHooks<Target>, target: &mut Target) {
        if let Some(taken) = hooks.take_hooks() {
            for hook in taken {
                hook(target);
            }
        }
    }

    #[test]
    fn hooks_run_in_registration_order() {
        let mut hooks = ReadyHooks::new();
        hooks.register(|t: &mut Target| t.log.push("first"));
        hooks.register(|t: &mut Target| t.log.push("second"));

        let mut target = Target::default();
        fire(&mut hooks, &mut target);
        assert_eq!(target.log, vec!["first", "second"]);
        assert!(hooks.has_fired());
    }

    #[test]
    fn second_firing_is_a_noop() {
        let mut hooks = ReadyHooks::new();
        hooks.register(|t: &mut Target| t.log.push("once"));

        let mut target = Target::default();
        fire(&mut hooks, &mut target);
        fire(&mut hooks, &mut target);
        assert_eq!(target.log, vec!["once"]);
    }

    #[test]
    fn late_registration_is_ignored() {
        let mut hooks = ReadyHooks::new();
        let mut target = Target::default();
        fire(&mut hooks, &mut target);

        hooks.register(|t: &mut Target| t.log.push("late"));
        assert!(hooks.take_hooks().is_none());
        assert!(target.log.is_empty());
    }
}
