use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub viewport: f64,
    pub content: f64,
}

impl ScrollMetrics {
    /// Fraction of the scrollable distance already travelled. Left unclamped
    /// so overscroll at the edges reads slightly outside `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let range = self.content - self.viewport;
        if !range.is_finite() || range <= 0.0 || !self.offset.is_finite() {
            return 0.0;
        }
        self.offset / range
    }
}

type Listener = Rc<dyn Fn(f64)>;

struct Shared {
    progress: Cell<f64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

#[derive(Clone)]
pub struct ScrollValue {
    shared: Rc<Shared>,
}

impl ScrollValue {
    pub fn constant(progress: f64) -> Self {
        channel_with(progress).1
    }

    pub fn get(&self) -> f64 {
        self.shared.progress.get()
    }

    pub fn watch(&self, listener: impl Fn(f64) + 'static) -> ScrollWatch {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        self.shared
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        ScrollWatch {
            shared: Rc::downgrade(&self.shared),
            id,
        }
    }

    pub fn watcher_count(&self) -> usize {
        self.shared.listeners.borrow().len()
    }
}

impl PartialEq for ScrollValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl fmt::Debug for ScrollValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollValue")
            .field("progress", &self.get())
            .field("watchers", &self.watcher_count())
            .finish()
    }
}

#[must_use = "dropping the guard stops the subscription"]
pub struct ScrollWatch {
    shared: Weak<Shared>,
    id: u64,
}

impl Drop for ScrollWatch {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

pub(crate) struct ScrollWriter {
    shared: Rc<Shared>,
}

impl ScrollWriter {
    /// Stores `progress` and notifies every watcher, even when the value is
    /// unchanged; resize ticks rely on that.
    pub(crate) fn set(&self, progress: f64) {
        self.shared.progress.set(progress);
        let listeners: Vec<Listener> = self
            .shared
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(progress);
        }
    }
}

pub(crate) fn channel() -> (ScrollWriter, ScrollValue) {
    channel_with(0.0)
}

fn channel_with(progress: f64) -> (ScrollWriter, ScrollValue) {
    let shared = Rc::new(Shared {
        progress: Cell::new(progress),
        listeners: RefCell::new(Vec::new()),
        next_id: Cell::new(0),
    });
    (
        ScrollWriter {
            shared: Rc::clone(&shared),
        },
        ScrollValue { shared },
    )
}

pub trait ScrollSource: 'static {
    type Handle;

    fn metrics(&self) -> Option<ScrollMetrics>;

    fn attach(&self, notify: Rc<dyn Fn()>) -> Option<Self::Handle>;
}

pub struct ScrollSampler<S: ScrollSource> {
    value: ScrollValue,
    handle: Option<S::Handle>,
}

impl<S: ScrollSource> ScrollSampler<S> {
    pub fn new(source: S) -> Self {
        let (writer, value) = channel();

        let Some(initial) = source.metrics() else {
            debug!("no document to sample, scroll progress stays at 0");
            return Self {
                value,
                handle: None,
            };
        };
        writer.set(initial.progress());

        let source = Rc::new(source);
        let notify: Rc<dyn Fn()> = {
            let source = Rc::clone(&source);
            Rc::new(move || {
                if let Some(metrics) = source.metrics() {
                    writer.set(metrics.progress());
                }
            })
        };

        let handle = source.attach(notify);
        if handle.is_none() {
            debug!("scroll source refused a subscription, progress is frozen");
        }

        Self {
            value,
            handle,
        }
    }

    pub fn value(&self) -> ScrollValue {
        self.value.clone()
    }

    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }
}

pub struct ScrollBroadcast<S: ScrollSource> {
    sampler: ScrollSampler<S>,
}

impl<S: ScrollSource> ScrollBroadcast<S> {
    pub fn provide(source: S) -> Self {
        Self {
            sampler: ScrollSampler::new(source),
        }
    }

    pub fn value(&self) -> ScrollValue {
        self.sampler.value()
    }

    pub fn consume(shared: Option<ScrollValue>, fallback: impl FnOnce() -> S) -> Consumed<S> {
        match shared {
            Some(value) => Consumed::Shared(value),
            None => {
                debug!("scroll consumer outside a provider, sampling locally");
                Consumed::Local(ScrollSampler::new(fallback()))
            }
        }
    }
}

pub enum Consumed<S: ScrollSource> {
    Shared(ScrollValue),
    Local(ScrollSampler<S>),
}

impl<S: ScrollSource> Consumed<S> {
    pub fn value(&self) -> ScrollValue {
        match self {
            Self::Shared(value) => value.clone(),
            Self::Local(sampler) => sampler.value(),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Clone, Default)]
    pub(crate) struct FakePage {
        pub(crate) metrics: Rc<Cell<Option<ScrollMetrics>>>,
        pub(crate) attached: Rc<Cell<usize>>,
        pub(crate) notify: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
    }

    pub(crate) struct FakeHandle {
        attached: Rc<Cell<usize>>,
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.attached.set(self.attached.get() - 1);
        }
    }

    impl FakePage {
        pub(crate) fn with_height(viewport: f64, content: f64) -> Self {
            let page = Self::default();
            page.metrics.set(Some(ScrollMetrics {
                offset: 0.0,
                viewport,
                content,
            }));
            page
        }

        pub(crate) fn scroll_to(&self, offset: f64) {
            if let Some(mut metrics) = self.metrics.get() {
                metrics.offset = offset;
                self.metrics.set(Some(metrics));
            }
            let callbacks: Vec<_> = self.notify.borrow().clone();
            for notify in callbacks {
                notify();
            }
        }
    }

    impl ScrollSource for FakePage {
        type Handle = FakeHandle;

        fn metrics(&self) -> Option<ScrollMetrics> {
            self.metrics.get()
        }

        fn attach(&self, notify: Rc<dyn Fn()>) -> Option<FakeHandle> {
            self.attached.set(self.attached.get() + 1);
            self.notify.borrow_mut().push(notify);
            Some(FakeHandle {
                attached: Rc::clone(&self.attached),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakePage;
    use super::*;

    #[test]
    fn progress_is_fraction_of_scrollable_range() {
        let metrics = ScrollMetrics {
            offset: 250.0,
            viewport: 500.0,
            content: 1500.0,
        };
        assert_eq!(metrics.progress(), 0.25);

        let short_page = ScrollMetrics {
            offset: 0.0,
            viewport: 800.0,
            content: 600.0,
        };
        assert_eq!(short_page.progress(), 0.0);
    }

    #[test]
    fn sampler_follows_the_page() {
        let page = FakePage::with_height(500.0, 1500.0);
        let sampler = ScrollSampler::new(page.clone());
        let value = sampler.value();

        assert_eq!(value.get(), 0.0);
        page.scroll_to(500.0);
        assert_eq!(value.get(), 0.5);
        page.scroll_to(1000.0);
        assert_eq!(value.get(), 1.0);
    }

    #[test]
    fn sampler_without_document_stays_at_zero() {
        let page = FakePage::default();
        let sampler = ScrollSampler::new(page.clone());

        assert!(!sampler.is_live());
        assert_eq!(page.attached.get(), 0);
        page.scroll_to(300.0);
        assert_eq!(sampler.value().get(), 0.0);
    }

    #[test]
    fn many_consumers_share_one_subscription() {
        let page = FakePage::with_height(500.0, 1500.0);
        let broadcast = ScrollBroadcast::provide(page.clone());

        let consumers: Vec<_> = (0..24)
            .map(|_| ScrollBroadcast::consume(Some(broadcast.value()), || page.clone()))
            .collect();

        assert_eq!(page.attached.get(), 1);
        assert!(consumers.iter().all(|consumer| !consumer.is_local()));

        page.scroll_to(250.0);
        assert!(consumers.iter().all(|consumer| consumer.value().get() == 0.25));
    }

    #[test]
    fn consumer_without_provider_samples_locally() {
        let page = FakePage::with_height(400.0, 1200.0);
        let consumer = ScrollBroadcast::consume(None, || page.clone());

        assert!(consumer.is_local());
        assert_eq!(page.attached.get(), 1);

        page.scroll_to(400.0);
        assert_eq!(consumer.value().get(), 0.5);
    }

    #[test]
    fn dropping_the_sampler_detaches() {
        let page = FakePage::with_height(400.0, 1200.0);
        let sampler = ScrollSampler::new(page.clone());
        assert_eq!(page.attached.get(), 1);

        drop(sampler);
        assert_eq!(page.attached.get(), 0);
    }

    #[test]
    fn watch_guard_unsubscribes() {
        let (writer, value) = channel();
        let seen = Rc::new(Cell::new(0.0));

        let guard = {
            let seen = Rc::clone(&seen);
            value.watch(move |progress| seen.set(progress))
        };
        writer.set(0.4);
        assert_eq!(seen.get(), 0.4);

        drop(guard);
        writer.set(0.9);
        assert_eq!(seen.get(), 0.4);
        assert_eq!(value.watcher_count(), 0);
    }
}
