// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The review card: one note bound to a rendered surface, with the gesture
//! recognizer wired to caller-supplied action handlers.

use crate::error::Fallible;
use crate::gesture::Action;
use crate::gesture::GestureRecognizer;
use crate::markdown::note_to_html;
use crate::note::NoteRef;
use crate::vault::NoteStore;

/// The rendered state of the card: content plus the live visual-feedback
/// channel (two CSS custom properties and a discrete action marker).
pub struct Surface {
    content_html: String,
    swipe: f64,
    rotation: f64,
    marker: Action,
}

impl Surface {
    fn new(content_html: String) -> Self {
        Self {
            content_html,
            swipe: 0.0,
            rotation: 0.0,
            marker: Action::None,
        }
    }

    pub fn content_html(&self) -> &str {
        &self.content_html
    }

    /// Value for the `--swipe-amount` custom property.
    pub fn swipe_amount(&self) -> String {
        format!("{}px", self.swipe)
    }

    /// Value for the `--rotation-amount` custom property.
    pub fn rotation_amount(&self) -> String {
        format!("{}deg", self.rotation)
    }

    /// Value for the `data-action` marker.
    pub fn marker(&self) -> Action {
        self.marker
    }

    fn reset(&mut self) {
        self.swipe = 0.0;
        self.rotation = 0.0;
        self.marker = Action::None;
    }
}

/// What happens when a gesture commits. Supplied by the caller; the card
/// controller never decides what an action means, nor how the queue moves.
pub trait CardHandlers {
    /// The card was dismissed to the left (archive).
    fn on_left(&mut self, note: &NoteRef) -> Fallible<()>;

    /// The card was flung to the right (keep, advance).
    fn on_right(&mut self, note: &NoteRef) -> Fallible<()>;

    /// The card was double-clicked (open the note).
    fn on_double_click(&mut self, note: &NoteRef) -> Fallible<()>;
}

/// Binds one note to a surface and drives the gesture recognizer. The
/// surface and drag session are owned here exclusively and are replaced
/// wholesale when the bound note changes, so no drag or visual state can
/// leak from one note to the next.
pub struct CardController {
    note: NoteRef,
    surface: Surface,
    gesture: GestureRecognizer,
}

impl CardController {
    /// Reads the note's content and mounts a fresh surface in the neutral,
    /// no-action state.
    pub fn mount(store: &dyn NoteStore, note: NoteRef) -> Fallible<Self> {
        let content = store.read_content(&note)?;
        Ok(Self {
            note,
            surface: Surface::new(note_to_html(&content)),
            gesture: GestureRecognizer::new(),
        })
    }

    pub fn note(&self) -> &NoteRef {
        &self.note
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Rebinds the card to a new note. Ignored while a drag is in progress:
    /// tearing the surface down mid-gesture would abandon the session in an
    /// ill-defined order. On read failure the old surface stays up and the
    /// failure is swallowed.
    pub fn set_note(&mut self, store: &dyn NoteStore, note: NoteRef) {
        if self.gesture.is_dragging() {
            log::warn!("set_note during an active drag, ignoring.");
            return;
        }
        match store.read_content(&note) {
            Ok(content) => {
                self.note = note;
                self.surface = Surface::new(note_to_html(&content));
                self.gesture = GestureRecognizer::new();
            }
            Err(e) => {
                log::warn!("could not read {}: {e}", note.path().display());
            }
        }
    }

    pub fn pointer_down(&mut self, x: f64, y: f64, t: f64) {
        self.gesture.pointer_down(x, y, t);
    }

    /// Pure computation plus surface-property writes; never blocks, so the
    /// drag stays responsive at input-event rate.
    pub fn pointer_move(&mut self, x: f64, y: f64, t: f64) {
        if let Some(reading) = self.gesture.pointer_move(x, y, t) {
            self.surface.swipe = reading.dx;
            self.surface.rotation = reading.rotation;
            self.surface.marker = reading.action;
        }
    }

    /// Commits the action previewed by the last move. The handler runs to
    /// completion first; only then is the surface reset to neutral, and it
    /// is reset whether or not the handler succeeded. A handler failure is
    /// returned to the caller, which must not assume the action took effect.
    pub fn pointer_up(&mut self, handlers: &mut dyn CardHandlers) -> Fallible<Action> {
        let committed = self.gesture.pointer_up();
        let result = match committed {
            Action::None => Ok(()),
            Action::Left => handlers.on_left(&self.note),
            Action::Right => handlers.on_right(&self.note),
        };
        self.surface.reset();
        result?;
        Ok(committed)
    }

    /// The pointer left the surface: the drag is abandoned, nothing commits.
    pub fn pointer_leave(&mut self) {
        self.gesture.pointer_leave();
        self.surface.reset();
    }

    /// Independent of any drag state.
    pub fn double_click(&mut self, handlers: &mut dyn CardHandlers) -> Fallible<()> {
        handlers.on_double_click(&self.note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::fail;
    use crate::testing::MemStore;

    #[derive(Default)]
    struct Recorder {
        lefts: Vec<String>,
        rights: Vec<String>,
        opens: Vec<String>,
        fail_next: bool,
    }

    impl CardHandlers for Recorder {
        fn on_left(&mut self, note: &NoteRef) -> Fallible<()> {
            if self.fail_next {
                return fail("archive failed");
            }
            self.lefts.push(note.title().to_string());
            Ok(())
        }

        fn on_right(&mut self, note: &NoteRef) -> Fallible<()> {
            self.rights.push(note.title().to_string());
            Ok(())
        }

        fn on_double_click(&mut self, note: &NoteRef) -> Fallible<()> {
            self.opens.push(note.title().to_string());
            Ok(())
        }
    }

    fn store() -> MemStore {
        MemStore::new(&[
            ("Inbox/a.md", "alpha content #review"),
            ("Inbox/b.md", "beta content #review"),
        ])
    }

    fn mounted(store: &MemStore) -> CardController {
        CardController::mount(store, NoteRef::new("Inbox/a.md")).unwrap()
    }

    fn drag(card: &mut CardController, dx: f64) {
        card.pointer_down(400.0, 300.0, 1000.0);
        card.pointer_move(400.0 + dx / 2.0, 300.0, 2000.0);
        card.pointer_move(400.0 + dx, 300.0, 3000.0);
    }

    #[test]
    fn test_mount_renders_content() {
        let store = store();
        let card = mounted(&store);
        assert!(card.surface().content_html().contains("alpha content"));
        assert_eq!(card.surface().swipe_amount(), "0px");
        assert_eq!(card.surface().rotation_amount(), "0deg");
        assert_eq!(card.surface().marker(), Action::None);
    }

    #[test]
    fn test_mount_fails_on_missing_note() {
        let store = store();
        assert!(CardController::mount(&store, NoteRef::new("Inbox/gone.md")).is_err());
    }

    #[test]
    fn test_move_previews_on_surface() {
        let store = store();
        let mut card = mounted(&store);
        drag(&mut card, 150.0);
        assert_eq!(card.surface().swipe_amount(), "150px");
        assert_eq!(card.surface().rotation_amount(), "7.5deg");
        assert_eq!(card.surface().marker(), Action::Right);
    }

    #[test]
    fn test_commit_right_then_neutral() {
        let store = store();
        let mut card = mounted(&store);
        let mut handlers = Recorder::default();
        drag(&mut card, 150.0);
        let committed = card.pointer_up(&mut handlers).unwrap();
        assert_eq!(committed, Action::Right);
        assert_eq!(handlers.rights, vec!["a"]);
        assert!(handlers.lefts.is_empty());
        assert_eq!(card.surface().swipe_amount(), "0px");
        assert_eq!(card.surface().rotation_amount(), "0deg");
        assert_eq!(card.surface().marker(), Action::None);
    }

    #[test]
    fn test_commit_left() {
        let store = store();
        let mut card = mounted(&store);
        let mut handlers = Recorder::default();
        drag(&mut card, -150.0);
        assert_eq!(card.pointer_up(&mut handlers).unwrap(), Action::Left);
        assert_eq!(handlers.lefts, vec!["a"]);
    }

    #[test]
    fn test_short_drag_commits_nothing() {
        let store = store();
        let mut card = mounted(&store);
        let mut handlers = Recorder::default();
        drag(&mut card, 40.0);
        assert_eq!(card.pointer_up(&mut handlers).unwrap(), Action::None);
        assert!(handlers.lefts.is_empty());
        assert!(handlers.rights.is_empty());
    }

    #[test]
    fn test_leave_resets_without_commit() {
        let store = store();
        let mut card = mounted(&store);
        let mut handlers = Recorder::default();
        drag(&mut card, 250.0);
        card.pointer_leave();
        assert_eq!(card.surface().swipe_amount(), "0px");
        assert_eq!(card.surface().marker(), Action::None);
        // The following up is a stray event and must not commit.
        assert_eq!(card.pointer_up(&mut handlers).unwrap(), Action::None);
        assert!(handlers.rights.is_empty());
    }

    #[test]
    fn test_handler_failure_still_resets() {
        let store = store();
        let mut card = mounted(&store);
        let mut handlers = Recorder {
            fail_next: true,
            ..Recorder::default()
        };
        drag(&mut card, -150.0);
        let result = card.pointer_up(&mut handlers);
        assert!(result.is_err());
        // The card is left recoverable: neutral visuals, same note.
        assert_eq!(card.surface().swipe_amount(), "0px");
        assert_eq!(card.surface().marker(), Action::None);
        assert_eq!(card.note().title(), "a");
    }

    #[test]
    fn test_set_note_replaces_surface() {
        let store = store();
        let mut card = mounted(&store);
        card.set_note(&store, NoteRef::new("Inbox/b.md"));
        assert_eq!(card.note().title(), "b");
        assert!(card.surface().content_html().contains("beta content"));
        assert_eq!(card.surface().marker(), Action::None);
    }

    #[test]
    fn test_set_note_during_drag_is_ignored() {
        let store = store();
        let mut card = mounted(&store);
        drag(&mut card, 50.0);
        card.set_note(&store, NoteRef::new("Inbox/b.md"));
        assert_eq!(card.note().title(), "a");
        assert_eq!(card.surface().swipe_amount(), "50px");
    }

    #[test]
    fn test_set_note_read_failure_keeps_old_surface() {
        let store = store();
        let mut card = mounted(&store);
        store.delete(&NoteRef::new("Inbox/b.md"));
        card.set_note(&store, NoteRef::new("Inbox/b.md"));
        assert_eq!(card.note().title(), "a");
        assert!(card.surface().content_html().contains("alpha content"));
    }

    #[test]
    fn test_double_click_opens_current_note() {
        let store = store();
        let mut card = mounted(&store);
        let mut handlers = Recorder::default();
        // Mid-drag, to show independence from drag state.
        card.pointer_down(400.0, 300.0, 1000.0);
        card.double_click(&mut handlers).unwrap();
        assert_eq!(handlers.opens, vec!["a"]);
    }

    // The end-to-end shape from the queue's point of view: swipe right on A,
    // the caller advances and rebinds, the card shows B.
    #[test]
    fn test_right_swipe_then_rebind() {
        let store = store();
        let mut card = mounted(&store);
        let mut handlers = Recorder::default();
        card.pointer_down(400.0, 300.0, 1000.0);
        card.pointer_move(550.0, 300.0, 1120.0);
        assert_eq!(card.pointer_up(&mut handlers).unwrap(), Action::Right);
        assert_eq!(handlers.rights, vec!["a"]);
        card.set_note(&store, NoteRef::new("Inbox/b.md"));
        assert!(card.surface().content_html().contains("beta content"));
        assert_eq!(card.surface().marker(), Action::None);
    }
}
