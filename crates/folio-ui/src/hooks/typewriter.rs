//! Typewriter reveal hook

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::scheduler;
use folio_core::{Typewriter, VisibilityTrigger};
use super::use_task_scope;
use tokio_util::sync::CancellationToken;

/// Handle returned by [`use_typewriter`]
#[derive(Clone)]
pub struct TypewriterHandle {
    typewriter: Signal<Typewriter>,
    trigger: Signal<VisibilityTrigger>,
    interval: Duration,
    token: CancellationToken,
}

impl TypewriterHandle {
    /// Begin revealing. Only the first call per mount has an effect.
    pub fn start(&self) {
        let mut trigger = self.trigger;
        if !trigger.write().fire() {
            return;
        }

        let mut typewriter = self.typewriter;
        let interval = self.interval;
        let token = self.token.clone();
        spawn(async move {
            scheduler::every(interval, token, move || typewriter.write().tick()).await;
        });
    }

    pub fn revealed(&self) -> String {
        self.typewriter.read().revealed().to_string()
    }

    pub fn is_complete(&self) -> bool {
        self.typewriter.read().is_complete()
    }
}

/// Reveal `text` one character per `interval` once `start()` is called.
pub fn use_typewriter(text: String, interval: Duration) -> TypewriterHandle {
    let token = use_task_scope();
    let typewriter = use_signal(move || Typewriter::new(text));
    let trigger = use_signal(VisibilityTrigger::new);

    TypewriterHandle {
        typewriter,
        trigger,
        interval,
        token,
    }
}
