//! Per-component cancellation

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::TaskScope;
use tokio_util::sync::CancellationToken;

/// A token cancelled when the calling component unmounts.
///
/// Pass it to every `scheduler::after` / `scheduler::every` the component
/// spawns so no callback touches its signals after teardown.
pub fn use_task_scope() -> CancellationToken {
    let scope = use_hook(|| Rc::new(TaskScope::new()));
    let token = use_hook({
        let scope = scope.clone();
        move || scope.token()
    });

    use_drop(move || scope.cancel());

    token
}
