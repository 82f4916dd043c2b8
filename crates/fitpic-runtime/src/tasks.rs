use std::future::Future;

use tokio::task::JoinHandle;

/// Group of timer tasks that are cancelled together.
///
/// Every cancellation bumps the generation. A task captures the generation
/// it was spawned under and checks [`TaskScope::is_current`] after each
/// await while holding the app lock, so a task whose scope was cancelled
/// never mutates state even if it was already past its last await when
/// the abort landed.
#[derive(Debug, Default)]
pub(crate) struct TaskScope {
    generation: u64,
    handles: Vec<JoinHandle<()>>,
}

impl TaskScope {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handles.retain(|handle| !handle.is_finished());
        self.handles.push(tokio::spawn(task));
    }

    /// Abort every pending task and start a new generation.
    pub fn cancel(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
        self.generation += 1;
    }

    pub fn is_idle(&self) -> bool {
        self.handles.iter().all(|handle| handle.is_finished())
    }
}

/// Which scope a timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    /// Page transitions
    Transition,
    /// Onboarding step fades
    Step,
    /// Processing steps and insight rotation
    Processing,
    /// Feed loads, refreshes and the delayed initial load
    Feed,
    /// Add-all-to-cart and checkout delays
    Commerce,
}

#[derive(Debug, Default)]
pub(crate) struct Scopes {
    transition: TaskScope,
    step: TaskScope,
    processing: TaskScope,
    feed: TaskScope,
    commerce: TaskScope,
}

impl Scopes {
    pub fn get(&self, scope: Scope) -> &TaskScope {
        match scope {
            Scope::Transition => &self.transition,
            Scope::Step => &self.step,
            Scope::Processing => &self.processing,
            Scope::Feed => &self.feed,
            Scope::Commerce => &self.commerce,
        }
    }

    pub fn get_mut(&mut self, scope: Scope) -> &mut TaskScope {
        match scope {
            Scope::Transition => &mut self.transition,
            Scope::Step => &mut self.step,
            Scope::Processing => &mut self.processing,
            Scope::Feed => &mut self.feed,
            Scope::Commerce => &mut self.commerce,
        }
    }

    pub fn cancel_all(&mut self) {
        for scope in [
            Scope::Transition,
            Scope::Step,
            Scope::Processing,
            Scope::Feed,
            Scope::Commerce,
        ] {
            self.get_mut(scope).cancel();
        }
    }

    pub fn is_idle(&self) -> bool {
        [
            &self.transition,
            &self.step,
            &self.processing,
            &self.feed,
            &self.commerce,
        ]
        .iter()
        .all(|scope| scope.is_idle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_cancel_aborts_pending_task() {
        let fired = Arc::new(AtomicBool::new(false));
        let mut scope = TaskScope::default();

        let flag = fired.clone();
        scope.spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            flag.store(true, Ordering::SeqCst);
        });
        let before = scope.generation();
        scope.cancel();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(!fired.load(Ordering::SeqCst));
        assert!(!scope.is_current(before));
        assert!(scope.is_idle());
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawn_prunes_finished_handles() {
        let mut scope = TaskScope::default();
        scope.spawn(async {});
        tokio::time::sleep(Duration::from_millis(1)).await;
        scope.spawn(async {
            tokio::time::sleep(Duration::from_secs(1)).await;
        });
        assert_eq!(scope.handles.len(), 1);
        assert!(!scope.is_idle());
    }
}
