use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

/// Returns `true` once the node has entered the viewport and stays `true`
/// for the rest of the mount. Scrolling away and back does not replay it.
#[hook]
pub fn use_reveal_once(node: NodeRef) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut watch = None;
                if !*revealed {
                    if let Some(element) = node.cast::<Element>() {
                        watch = observe_once(&element, revealed.setter());
                        if watch.is_none() {
                            // No observer support, show the content right away.
                            revealed.set(true);
                        }
                    }
                }
                move || {
                    if let Some((observer, _callback)) = watch {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}

/// Outcome of one batch of viewport entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RevealStep {
    /// Still off-screen, keep observing.
    Wait,
    /// First entry: show and stop observing.
    Reveal,
    /// Already shown earlier in this mount; only stop observing.
    Done,
}

fn next_step(already_revealed: bool, entered: bool) -> RevealStep {
    match (already_revealed, entered) {
        (true, _) => RevealStep::Done,
        (false, true) => RevealStep::Reveal,
        (false, false) => RevealStep::Wait,
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    reveal: UseStateSetter<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let mut revealed = false;
    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        let entered = entries
            .iter()
            .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
            .any(|entry| entry.is_intersecting());
        match next_step(revealed, entered) {
            RevealStep::Wait => {}
            RevealStep::Reveal => {
                debug!("Element entered viewport, revealing");
                revealed = true;
                reveal.set(true);
                observer.disconnect();
            }
            RevealStep::Done => observer.disconnect(),
        }
    });

    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveals_for(visibility: &[bool]) -> usize {
        let mut revealed = false;
        let mut reveals = 0;
        for &entered in visibility {
            if next_step(revealed, entered) == RevealStep::Reveal {
                revealed = true;
                reveals += 1;
            }
        }
        reveals
    }

    #[test]
    fn waits_while_off_screen() {
        assert_eq!(next_step(false, false), RevealStep::Wait);
        assert_eq!(reveals_for(&[false, false, false]), 0);
    }

    #[test]
    fn first_entry_reveals() {
        assert_eq!(next_step(false, true), RevealStep::Reveal);
    }

    #[test]
    fn reentering_after_reveal_does_not_replay() {
        assert_eq!(next_step(true, true), RevealStep::Done);
        assert_eq!(next_step(true, false), RevealStep::Done);
        assert_eq!(reveals_for(&[false, true, false, true, true]), 1);
    }
}
