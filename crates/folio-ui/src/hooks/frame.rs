//! Fixed-rate animation loop

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::scheduler::{self, Flow};

use super::use_task_scope;

/// Call `on_frame` every `period` for as long as the component is mounted.
///
/// Only the closure from the first render is kept.
pub fn use_frame_loop(period: Duration, on_frame: impl FnMut() + 'static) {
    let token = use_task_scope();

    use_hook(move || {
        let mut on_frame = on_frame;
        spawn(async move {
            scheduler::every(period, token, move || {
                on_frame();
                Flow::Continue
            })
            .await;
        });
    });
}
