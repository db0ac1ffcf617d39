// Login modal visibility state and the controller that drives it.
//
// Nothing here touches platform APIs: the DOM side implements
// `VisibilityMarker` and `TriggerLookup` for web-sys types, and host tests
// implement them with in-memory fakes.

/// Whether the login modal is currently shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalVisibility {
    Open,
    Closed,
}

impl ModalVisibility {
    /// Map presence of the hidden marker to a visibility state.
    #[inline]
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden {
            ModalVisibility::Closed
        } else {
            ModalVisibility::Open
        }
    }

    /// Next state after `event`.
    pub fn apply(self, event: ModalEvent) -> Self {
        match event {
            ModalEvent::OpenTrigger => ModalVisibility::Open,
            ModalEvent::CloseTrigger => ModalVisibility::Closed,
            ModalEvent::RootClick { on_backdrop: true } => ModalVisibility::Closed,
            ModalEvent::RootClick { on_backdrop: false } => self,
        }
    }
}

/// User interaction that may change visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    OpenTrigger,
    CloseTrigger,
    /// A click that reached the modal root listener. `on_backdrop` is true only
    /// when the click target is the root element itself, not a descendant.
    RootClick { on_backdrop: bool },
}

/// Class-list access on the modal root element.
pub trait VisibilityMarker {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

#[derive(Clone, Debug)]
pub struct ModalController<M> {
    root: M,
    hidden_class: &'static str,
}

impl<M: VisibilityMarker> ModalController<M> {
    pub fn new(root: M, hidden_class: &'static str) -> Self {
        Self { root, hidden_class }
    }

    pub fn root(&self) -> &M {
        &self.root
    }

    #[inline]
    pub fn visibility(&self) -> ModalVisibility {
        ModalVisibility::from_hidden(self.root.has_class(self.hidden_class))
    }

    #[inline]
    pub fn open(&self) {
        self.root.remove_class(self.hidden_class);
    }

    #[inline]
    pub fn close(&self) {
        self.root.add_class(self.hidden_class);
    }

    /// Apply `event` to the current state and write the marker if it changed.
    pub fn handle(&self, event: ModalEvent) -> ModalVisibility {
        let current = self.visibility();
        let next = current.apply(event);
        if next != current {
            match next {
                ModalVisibility::Open => self.open(),
                ModalVisibility::Closed => self.close(),
            }
            log::debug!("[modal] {:?} -> {:?} on {:?}", current, next, event);
        }
        next
    }
}

/// Element lookup by id on the host page.
pub trait TriggerLookup {
    type Element;
    fn find(&self, id: &str) -> Option<Self::Element>;
}

/// Hand every trigger present on the page to `bind` with the event its click
/// produces. Absent ids are skipped. Returns how many triggers were bound.
pub fn wire_triggers<L: TriggerLookup>(
    page: &L,
    open_ids: &[&str],
    close_id: &str,
    mut bind: impl FnMut(L::Element, ModalEvent),
) -> usize {
    let triggers = open_ids
        .iter()
        .map(|id| (*id, ModalEvent::OpenTrigger))
        .chain(std::iter::once((close_id, ModalEvent::CloseTrigger)));
    let mut bound = 0;
    for (id, event) in triggers {
        if let Some(el) = page.find(id) {
            bind(el, event);
            bound += 1;
        }
    }
    bound
}
