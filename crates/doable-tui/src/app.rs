//! Application core — event loop, input handling, action dispatch.
//!
//! The app owns the [`TodoStore`] and wires the two user events the UI
//! supports: submitting a new title (Enter in the input field) and
//! deleting an item (click on its remove control, or Delete on the
//! selected row). Network round trips run as spawned tasks whose
//! completions come back through the action channel; whichever
//! completion is processed last wins — there is deliberately no request
//! sequencing or cancellation.

use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use doable_core::{Controller, CoreError, Todo, TodoId, TodoStore};

use crate::action::{Action, Modal, ModalKind};
use crate::event::{Event, EventReader};
use crate::theme;
use crate::tui::Tui;
use crate::view;

/// Top-level application state and event loop.
pub struct App {
    /// Facade over the remote store.
    controller: Controller,
    /// The one state container. Only written via `set_todos`.
    store: TodoStore,
    /// Title input field. Always holds keyboard focus for text keys.
    input: Input,
    /// Selected list row (for keyboard delete).
    selected: usize,
    /// Index of the first visible list row.
    scroll: usize,
    /// Active blocking modal. Captures all input while present.
    modal: Option<Modal>,
    /// Whether the app should keep running.
    running: bool,
    /// Delete-control geometry from the last render, paired with ids.
    delete_zones: Vec<(Rect, TodoId)>,
    /// Action sender — spawned tasks and the store callback use this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — the main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(controller: Controller) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            controller,
            store: TodoStore::new(),
            input: Input::default(),
            selected: 0,
            scroll: 0,
            modal: None,
            running: true,
            delete_zones: Vec::new(),
            action_tx,
            action_rx,
        }
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.init();

        let mut events = EventReader::new(Duration::from_millis(250));
        info!("event loop started");

        // First paint before any event arrives.
        tui.draw(|frame| self.render(frame))?;

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            // Map event → action.
            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key) {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse_event(mouse) {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
            }

            // Drain and process all queued actions, then repaint once.
            let mut repaint = false;
            while let Ok(action) = self.action_rx.try_recv() {
                repaint |= self.process_action(action);
            }
            if repaint {
                tui.draw(|frame| self.render(frame))?;
            }
        }

        events.stop();
        info!("event loop ended");
        Ok(())
    }

    /// One-time wiring: subscribe the renderer to the store, then kick
    /// off the initial load.
    fn init(&mut self) {
        // Any list replacement requests a repaint — this is the one
        // subscriber the store supports.
        let tx = self.action_tx.clone();
        self.store.subscribe(move |todos| {
            debug!(count = todos.len(), "todo list changed");
            let _ = tx.send(Action::Render);
        });

        // Initial load.
        let controller = self.controller.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            if let Some(action) = Self::initial_load_action(controller.load().await) {
                let _ = tx.send(action);
            }
        });
    }

    /// Map the initial load's outcome to an action. Failure is
    /// deliberate silence: log it and leave the list alone — no modal,
    /// no action, the placeholder stays up. Create/delete failures are
    /// loud; only this one is not.
    fn initial_load_action(result: Result<Vec<Todo>, CoreError>) -> Option<Action> {
        match result {
            Ok(todos) => Some(Action::Loaded(todos)),
            Err(e) => {
                debug!(error = %e, "initial load failed; starting with an empty list");
                None
            }
        }
    }

    // ── Event mapping ─────────────────────────────────────────────

    /// Map a key event to an action. A modal captures everything until
    /// dismissed; otherwise Enter submits, arrows move the selection,
    /// Delete removes, and every other key edits the input field.
    fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        if self.modal.is_some() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => Some(Action::DismissModal),
                _ => None,
            };
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),

            (_, KeyCode::Enter) => self.on_submit(),

            (_, KeyCode::Up) => {
                self.move_selection(-1);
                Some(Action::Render)
            }
            (_, KeyCode::Down) => {
                self.move_selection(1);
                Some(Action::Render)
            }

            (_, KeyCode::Delete) => self.selected_id().map(Action::RequestDelete),

            (_, KeyCode::Esc) => {
                self.input.reset();
                Some(Action::Render)
            }

            _ => {
                self.input
                    .handle_event(&crossterm::event::Event::Key(key));
                Some(Action::Render)
            }
        }
    }

    /// Mouse: only a left click on a row's delete control does anything;
    /// clicks elsewhere in the row or region are ignored.
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Option<Action> {
        if self.modal.is_some() {
            return None;
        }
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            return self
                .delete_at(mouse.column, mouse.row)
                .map(Action::RequestDelete);
        }
        None
    }

    /// The submit handler. Empty (after trimming) titles never leave
    /// the client: a blocking warning goes up instead and nothing else
    /// happens. Otherwise the create round trip is spawned; the input
    /// is cleared only once the server has answered.
    fn on_submit(&mut self) -> Option<Action> {
        let title = self.input.value().to_owned();
        if title.trim().is_empty() {
            return Some(Action::ShowModal(Modal::warning("please input title!")));
        }
        self.spawn_create(title);
        None
    }

    /// Resolve a click position to a todo id through the render-time
    /// zone lookup.
    fn delete_at(&self, column: u16, row: u16) -> Option<TodoId> {
        self.delete_zones
            .iter()
            .find(|(zone, _)| zone.contains(Position::new(column, row)))
            .map(|&(_, id)| id)
    }

    fn selected_id(&self) -> Option<TodoId> {
        self.store.todos().get(self.selected).map(|t| t.id)
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.store.todos().len();
        if len == 0 {
            return;
        }
        #[allow(clippy::cast_possible_wrap)]
        let next = (self.selected as isize + delta).clamp(0, len as isize - 1);
        #[allow(clippy::cast_sign_loss)]
        {
            self.selected = next as usize;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.store.todos().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    // ── Action processing ─────────────────────────────────────────

    /// Process a single action. Returns whether a repaint is needed.
    /// (List replacements don't return true themselves — the store's
    /// subscriber queues a `Render` action for them.)
    fn process_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                self.running = false;
                false
            }

            Action::Tick | Action::Render | Action::Resize(..) => true,

            Action::RequestDelete(id) => {
                self.spawn_delete(id);
                false
            }

            Action::Loaded(todos) => {
                self.store.set_todos(todos);
                self.clamp_selection();
                false
            }

            Action::Created(todo) => {
                let mut next = Vec::with_capacity(self.store.todos().len() + 1);
                next.push(todo);
                next.extend(self.store.todos().iter().cloned());
                self.store.set_todos(next);
                self.input.reset();
                false
            }

            Action::Deleted(id) => {
                let next: Vec<Todo> = self
                    .store
                    .todos()
                    .iter()
                    .filter(|t| t.id != id)
                    .cloned()
                    .collect();
                self.store.set_todos(next);
                self.clamp_selection();
                false
            }

            Action::CreateFailed(detail) => {
                self.modal = Some(Modal::error(format!("add new task failed: {detail}")));
                true
            }

            Action::DeleteFailed(detail) => {
                self.modal = Some(Modal::error(format!("delete todo failed: {detail}")));
                true
            }

            Action::ShowModal(modal) => {
                self.modal = Some(modal);
                true
            }

            Action::DismissModal => {
                self.modal = None;
                true
            }
        }
    }

    // ── Spawned round trips ───────────────────────────────────────

    fn spawn_create(&self, title: String) {
        let controller = self.controller.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            match controller.add(&title).await {
                Ok(todo) => {
                    let _ = tx.send(Action::Created(todo));
                }
                Err(e) => {
                    warn!(error = %e, "create failed");
                    let _ = tx.send(Action::CreateFailed(e.to_string()));
                }
            }
        });
    }

    fn spawn_delete(&self, id: TodoId) {
        let controller = self.controller.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            match controller.remove(id).await {
                Ok(()) => {
                    let _ = tx.send(Action::Deleted(id));
                }
                Err(e) => {
                    warn!(error = %e, "delete failed");
                    let _ = tx.send(Action::DeleteFailed(e.to_string()));
                }
            }
        });
    }

    // ── Rendering ─────────────────────────────────────────────────

    /// Render the full frame: input, list, status line, then any modal
    /// on top.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let layout = Layout::vertical([
            Constraint::Length(3), // title input
            Constraint::Min(1),    // todo list
            Constraint::Length(1), // status line
        ])
        .split(area);

        self.render_input(frame, layout[0]);
        self.render_list(frame, layout[1]);
        self.render_status(frame, layout[2]);

        if let Some(modal) = self.modal.clone() {
            render_modal(frame, area, &modal);
        }
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" new todo ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let line = Line::from(vec![
            Span::styled(self.input.value().to_owned(), theme::list_row()),
            Span::styled("█", theme::border_focused()),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" todos ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let todos = self.store.todos();
        let visible = usize::from(inner.height);

        // Keep the selection in view.
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if visible > 0 && self.selected >= self.scroll + visible {
            self.scroll = self.selected + 1 - visible;
        }

        let selected = if todos.is_empty() {
            None
        } else {
            Some(self.selected)
        };
        let lines: Vec<Line<'_>> = view::todo_lines(todos, inner.width, selected)
            .into_iter()
            .skip(self.scroll)
            .take(visible)
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);

        // Rebuilt every frame so clicks always hit current rows.
        self.delete_zones = view::delete_zones(todos, inner, self.scroll);
    }

    #[allow(clippy::unused_self)]
    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(" Enter ", theme::key_hint_key()),
            Span::styled("add  ", theme::key_hint()),
            Span::styled("↑/↓ ", theme::key_hint_key()),
            Span::styled("select  ", theme::key_hint()),
            Span::styled("Del", theme::key_hint_key()),
            Span::styled("/click ", theme::key_hint()),
            Span::styled(view::DELETE_LABEL, theme::key_hint_key()),
            Span::styled(" remove  ", theme::key_hint()),
            Span::styled("Ctrl+C ", theme::key_hint_key()),
            Span::styled("quit", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Render a centered blocking dialog. Dismissed with Enter or Esc.
fn render_modal(frame: &mut Frame, area: Rect, modal: &Modal) {
    let width = 50u16.min(area.width.saturating_sub(4));
    let height = 6u16.min(area.height.saturating_sub(2));

    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    let dialog_area = Rect::new(area.x + x, area.y + y, width, height);

    // Clear the background under the dialog.
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BG_DIM)),
        dialog_area,
    );

    let (title, border_color) = match modal.kind {
        ModalKind::Warning => (" warning ", theme::WARNING_YELLOW),
        ModalKind::Error => (" error ", theme::ERROR_RED),
    };

    let block = Block::default()
        .title(title)
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let text = vec![
        Line::styled(modal.message.clone(), theme::list_row()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", theme::key_hint_key()),
            Span::styled(" dismiss", theme::key_hint()),
        ]),
    ];
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
}
