//! Property transitions driven by an explicit clock.
//!
//! [`Animator::animate`] starts a group of transitions and hands back a
//! [`Completion`]. The host calls [`Animator::update`] with the current time;
//! each update writes interpolated values into the document and resolves the
//! completions of groups whose transitions have all finished. There is no
//! cancellation: a group that never finishes never resolves.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use futures::channel::oneshot;

use crate::element::{Document, NodeId};
use crate::transitions::{Easing, TransitionConfig};

pub use futures::channel::oneshot::Canceled;

/// Which property is being transitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionProperty {
    Height,
    BorderBottom,
}

impl TransitionProperty {
    fn read(self, doc: &Document, node: NodeId) -> u16 {
        let style = doc.style(node);
        match self {
            TransitionProperty::Height => style.height.unwrap_or(0),
            TransitionProperty::BorderBottom => style.border.bottom,
        }
    }

    fn write(self, doc: &mut Document, node: NodeId, value: u16) {
        let style = doc.style_mut(node);
        match self {
            TransitionProperty::Height => style.height = Some(value),
            TransitionProperty::BorderBottom => style.border.bottom = value,
        }
    }
}

/// One property to move to a target value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyTarget {
    pub node: NodeId,
    pub property: TransitionProperty,
    pub to: u16,
}

impl PropertyTarget {
    pub fn height(node: NodeId, to: u16) -> Self {
        Self {
            node,
            property: TransitionProperty::Height,
            to,
        }
    }

    pub fn border_bottom(node: NodeId, to: u16) -> Self {
        Self {
            node,
            property: TransitionProperty::BorderBottom,
            to,
        }
    }
}

type Key = (NodeId, TransitionProperty);

#[derive(Debug, Clone)]
struct ActiveTransition {
    from: u16,
    to: u16,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl ActiveTransition {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn value_at(&self, now: Instant) -> u16 {
        lerp_u16(self.from, self.to, self.easing.apply(self.progress(now)))
    }

    fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

#[derive(Debug)]
struct Group {
    remaining: HashSet<Key>,
    done: oneshot::Sender<()>,
}

/// Runs property transitions on a [`Document`].
#[derive(Debug, Default)]
pub struct Animator {
    active: HashMap<Key, ActiveTransition>,
    groups: Vec<Group>,
    /// When true, transitions jump straight to their target.
    reduced_motion: bool,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Returns true if any transition is currently running.
    pub fn has_active_transitions(&self) -> bool {
        !self.active.is_empty()
    }

    /// Start transitions for every target, as one group.
    ///
    /// Each property starts from its current value in the document; a
    /// property that is already transitioning continues from where it is.
    /// The returned [`Completion`] resolves once the whole group is done.
    pub fn animate(
        &mut self,
        doc: &mut Document,
        targets: &[PropertyTarget],
        config: TransitionConfig,
        now: Instant,
    ) -> Completion {
        let (tx, rx) = oneshot::channel();
        let completion = Completion { rx, done: false };

        if self.reduced_motion || config.duration.is_zero() {
            for target in targets {
                self.forget(&(target.node, target.property));
                target.property.write(doc, target.node, target.to);
            }
            let _ = tx.send(());
            return completion;
        }

        let mut remaining = HashSet::new();
        for target in targets {
            let key = (target.node, target.property);
            let from = match self.active.get(&key) {
                Some(existing) => existing.value_at(now),
                None => target.property.read(doc, target.node),
            };
            self.forget(&key);
            log::trace!(
                "[animator] {} {:?}: {} -> {} over {:?}",
                target.node,
                target.property,
                from,
                target.to,
                config.duration
            );
            self.active.insert(
                key,
                ActiveTransition {
                    from,
                    to: target.to,
                    start: now,
                    duration: config.duration,
                    easing: config.easing,
                },
            );
            remaining.insert(key);
        }

        if remaining.is_empty() {
            let _ = tx.send(());
        } else {
            self.groups.push(Group {
                remaining,
                done: tx,
            });
        }
        completion
    }

    /// Advance every running transition to `now`, write the values into the
    /// document and resolve finished groups.
    pub fn update(&mut self, doc: &mut Document, now: Instant) {
        let mut finished = Vec::new();
        for (&(node, property), transition) in &self.active {
            property.write(doc, node, transition.value_at(now));
            if transition.is_finished(now) {
                finished.push((node, property));
            }
        }
        for key in &finished {
            self.active.remove(key);
        }
        if !finished.is_empty() {
            self.settle_groups(&finished);
        }
    }

    /// Drop `key` from whatever group is waiting on it.
    fn forget(&mut self, key: &Key) {
        if self.active.remove(key).is_some() {
            self.settle_groups(std::slice::from_ref(key));
        }
    }

    fn settle_groups(&mut self, keys: &[Key]) {
        let mut pending = Vec::with_capacity(self.groups.len());
        for mut group in self.groups.drain(..) {
            for key in keys {
                group.remaining.remove(key);
            }
            if group.remaining.is_empty() {
                // Receiver may have been dropped; nobody is waiting then.
                let _ = group.done.send(());
            } else {
                pending.push(group);
            }
        }
        self.groups = pending;
    }
}

/// Resolves when an animation group started by [`Animator::animate`] has
/// finished.
///
/// Poll it as a future, or check [`Completion::is_complete`] from a
/// synchronous event loop. If the animator is dropped first the future
/// yields [`Canceled`] and `is_complete` stays false.
#[derive(Debug)]
pub struct Completion {
    rx: oneshot::Receiver<()>,
    done: bool,
}

impl Completion {
    pub fn is_complete(&mut self) -> bool {
        if !self.done {
            self.done = matches!(self.rx.try_recv(), Ok(Some(())));
        }
        self.done
    }
}

impl Future for Completion {
    type Output = Result<(), Canceled>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.done {
            return Poll::Ready(Ok(()));
        }
        let polled = Pin::new(&mut self.rx).poll(cx);
        if let Poll::Ready(Ok(())) = polled {
            self.done = true;
        }
        polled
    }
}

fn lerp_u16(from: u16, to: u16, t: f32) -> u16 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as u16
}
