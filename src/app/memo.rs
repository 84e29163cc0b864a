// src/app/memo.rs

//! Single-slot memoization.

/// Cache for a value computed without arguments.
///
/// The slot stays filled until [`Memo::invalidate`] is called.
#[derive(Debug, Clone)]
pub struct Memo<T> {
    slot: Option<T>,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T> Memo<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Store `value`, replacing any cached one.
    pub fn insert(&mut self, value: T) -> &T {
        self.slot.insert(value)
    }

    /// Return the cached value, running `init` first when the slot is empty.
    ///
    /// A failed `init` leaves the slot empty.
    pub async fn get_or_try_insert_with<F, Fut, E>(&mut self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        match self.slot {
            Some(ref value) => Ok(value),
            None => Ok(self.slot.insert(init().await?)),
        }
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    pub fn is_cached(&self) -> bool {
        self.slot.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_invalidate() {
        let mut memo = Memo::new();
        assert!(!memo.is_cached());

        assert_eq!(*memo.insert(3), 3);
        assert_eq!(memo.get(), Some(&3));

        memo.insert(4);
        assert_eq!(memo.get(), Some(&4));

        memo.invalidate();
        assert_eq!(memo.get(), None);
    }

    #[tokio::test]
    async fn test_init_runs_once() {
        let mut memo = Memo::new();
        let mut calls = 0;

        for _ in 0..3 {
            let value = memo
                .get_or_try_insert_with(|| {
                    calls += 1;
                    async { Ok::<_, String>("table") }
                })
                .await
                .unwrap();
            assert_eq!(*value, "table");
        }
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_failed_init_leaves_slot_empty() {
        let mut memo: Memo<u32> = Memo::new();
        let result = memo
            .get_or_try_insert_with(|| async { Err::<u32, _>("offline") })
            .await;
        assert_eq!(result, Err("offline"));
        assert!(!memo.is_cached());
    }
}
