pub mod keywords;
pub mod prices;
pub mod resources;
pub mod title;

pub use keywords::aggregate;
pub use prices::summarize;
pub use title::{FALLBACK_TITLE, suggest_title};

use crate::results::Derived;
use std::panic::{self, AssertUnwindSafe};

/// Run an analysis stage, turning a panic into the stage's fallback value.
///
/// The diagnostic goes to the log; the caller only ever sees data.
pub(crate) fn guarded<T>(
    stage: &str,
    fallback: impl FnOnce() -> T,
    run: impl FnOnce() -> Derived<T>,
) -> Derived<T> {
    match panic::catch_unwind(AssertUnwindSafe(run)) {
        Ok(result) => result,
        Err(panic_info) => {
            ::log::error!("Error during {}: {}", stage, panic_message(&panic_info));
            Derived::Defaulted(fallback())
        }
    }
}

fn panic_message(panic_info: &Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guarded_passes_result_through() {
        let result = guarded("test", || 0, || Derived::Computed(7));
        assert_eq!(result, Derived::Computed(7));
    }

    #[test]
    fn test_guarded_converts_panic_to_fallback() {
        let result: Derived<Vec<String>> =
            guarded("test", Vec::new, || panic!("stage blew up"));
        assert_eq!(result, Derived::Defaulted(Vec::new()));
    }
}
