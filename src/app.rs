use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use std::path::PathBuf;

use crate::card_file::{self, expand_path};
use crate::config::Config;
use crate::store::{CardStore, Mode, StoreError, StoreEvent};
use crate::ui::layout::GridLayout;
use crate::ui::theme::Theme;

/// Text input requested from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    /// Name for a new standard-deck group
    NewGroup,
    /// Path of a card file to load
    LoadPath,
    /// Name for a group whose cards were already read
    LoadName { cards: Vec<String> },
    /// Path to export the active group to
    ExportPath,
    /// New label for the card at `index`
    RenameCard { index: usize },
    /// Label of a card to append
    AppendCard,
}

impl PromptKind {
    pub fn title(&self) -> &'static str {
        match self {
            PromptKind::NewGroup => " New group name ",
            PromptKind::LoadPath => " Load cards from file ",
            PromptKind::LoadName { .. } => " Name for loaded group ",
            PromptKind::ExportPath => " Export group to file ",
            PromptKind::RenameCard { .. } => " Rename card ",
            PromptKind::AppendCard => " New card (e.g. A♥, 大王, 10♣) ",
        }
    }
}

/// Destructive actions waiting for a yes/no answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteGroup { index: usize },
    DeleteCard { index: usize },
    DeleteSelected,
    RestoreDefault,
}

/// Application mode - determines what UI to show and how to handle input.
///
/// Browsing vs. editing is the store's concern; these are overlays on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Card grid, keys go to the store
    Board,
    /// Text input dialog
    Prompt { kind: PromptKind, input: String },
    /// Yes/no dialog
    Confirm { action: ConfirmAction, question: String },
    /// Quit requested
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// One-line message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Application state
pub struct App {
    /// Card groups and draw state
    store: CardStore,
    /// Configuration
    config: Config,
    /// Theme resolved from config
    theme: Theme,
    /// Current overlay mode
    mode: AppMode,
    /// Card under the cursor
    cursor: usize,
    /// First visible grid row
    scroll: usize,
    /// Grid from the last draw
    grid: GridLayout,
    /// Last status message
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: CardStore, config: Config) -> Self {
        let theme = config.resolve_theme();
        let mut app = Self {
            store,
            config,
            theme,
            mode: AppMode::Board,
            cursor: 0,
            scroll: 0,
            grid: GridLayout::default(),
            status: None,
        };
        app.status = Some(app.info(format!(
            "Using '{}' ({} cards)",
            app.store.active_group().name,
            app.card_count()
        )));
        app
    }

    // ----- accessors -----

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn mode(&self) -> &AppMode {
        &self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        matches!(self.mode, AppMode::Exit)
    }

    /// Record the grid computed for the current frame and keep the cursor on screen
    pub fn update_viewport(&mut self, grid: GridLayout) {
        self.grid = grid;
        self.scroll = grid.scroll_to(self.cursor, self.scroll);
        let max_scroll = grid
            .row_count(self.card_count())
            .saturating_sub(grid.visible_rows as usize);
        self.scroll = self.scroll.min(max_scroll);
    }

    // ----- startup -----

    /// Load card files given on the command line. Failures are reported, not fatal.
    pub fn load_files(&mut self, paths: &[PathBuf]) {
        for path in paths {
            match card_file::read_card_file(path) {
                Ok(file) => {
                    let result = self.store.load_group(&file.suggested_name, &file.cards);
                    self.apply(result);
                }
                Err(e) => self.report(format!("{e:#}")),
            }
        }
    }

    // ----- input -----

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.mode = AppMode::Exit;
            return;
        }

        match self.mode {
            AppMode::Board if self.store.is_editing() => self.handle_edit_key(key),
            AppMode::Board => self.handle_browse_key(key),
            AppMode::Prompt { .. } => self.handle_prompt_key(key),
            AppMode::Confirm { .. } => self.handle_confirm_key(key),
            AppMode::Exit => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        if self.handle_navigation(key.code) {
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.mode = AppMode::Exit,
            KeyCode::Char('d') => {
                let result = self.store.draw();
                if let Some(index) = self.store.current_index() {
                    self.cursor = index;
                }
                self.apply(result);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let result = self.store.toggle_card(self.cursor);
                self.apply(result);
            }
            KeyCode::Char('r') => {
                let result = self.store.reset();
                self.apply(result);
            }
            KeyCode::Char('[') => self.cycle_group(false),
            KeyCode::Char(']') | KeyCode::Tab => self.cycle_group(true),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                let result = self.store.switch_group(index);
                self.apply(result);
            }
            KeyCode::Char('a') => {
                let input = self.store.next_custom_name();
                self.open_prompt(PromptKind::NewGroup, input);
            }
            KeyCode::Char('x') => {
                let index = self.store.active_index();
                let name = self.store.active_group().name.clone();
                let deletable =
                    !self.store.active_group().is_default() && self.store.groups().len() > 1;
                if deletable {
                    let question = format!("Delete group '{name}'?");
                    self.confirm(ConfirmAction::DeleteGroup { index }, question);
                } else {
                    self.report(StoreError::CannotDelete(name));
                }
            }
            KeyCode::Char('o') => self.open_prompt(PromptKind::LoadPath, String::new()),
            KeyCode::Char('s') => match self.store.export_active() {
                Ok(_) => {
                    let input = format!("{}.txt", self.store.active_group().name);
                    self.open_prompt(PromptKind::ExportPath, input);
                }
                Err(e) => self.report(e),
            },
            KeyCode::Char('e') => {
                let result = self.store.enter_edit();
                self.apply(result);
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        if self.handle_navigation(key.code) {
            return;
        }

        let has_cards = self.card_count() > 0;
        match key.code {
            KeyCode::Esc | KeyCode::Char('e') => {
                let result = self.store.exit_edit();
                self.apply(result);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let result = self.store.toggle_selection(self.cursor);
                self.apply(result);
            }
            KeyCode::Char('n') => self.open_prompt(PromptKind::AppendCard, String::new()),
            KeyCode::Char('r') if has_cards => {
                let index = self.cursor;
                let input = self.store.active_group().cards[index].clone();
                self.open_prompt(PromptKind::RenameCard { index }, input);
            }
            KeyCode::Char('x') if has_cards => {
                let index = self.cursor;
                let question = format!(
                    "Delete card '{}'?",
                    self.store.active_group().cards[index]
                );
                self.confirm(ConfirmAction::DeleteCard { index }, question);
            }
            KeyCode::Char('X') => {
                let count = self.store.selection().len();
                if count == 0 {
                    self.report("No cards selected");
                } else {
                    let question = format!("Delete {count} selected cards?");
                    self.confirm(ConfirmAction::DeleteSelected, question);
                }
            }
            KeyCode::Char('D') => {
                let name = self.store.active_group().name.clone();
                if self.store.active_group().is_default() {
                    let question =
                        format!("Restore '{name}' to its default cards? All changes will be lost.");
                    self.confirm(ConfirmAction::RestoreDefault, question);
                } else {
                    self.report(StoreError::NotDefaultGroup(name));
                }
            }
            _ => {}
        }
    }

    /// Cursor movement shared by both store modes. Returns true if handled.
    fn handle_navigation(&mut self, code: KeyCode) -> bool {
        let total = self.card_count();
        let grid = self.grid;
        self.cursor = match code {
            KeyCode::Left | KeyCode::Char('h') => grid.move_left(self.cursor),
            KeyCode::Right | KeyCode::Char('l') => grid.move_right(self.cursor, total),
            KeyCode::Up | KeyCode::Char('k') => grid.move_up(self.cursor),
            KeyCode::Down | KeyCode::Char('j') => grid.move_down(self.cursor, total),
            KeyCode::Home | KeyCode::Char('g') => grid.move_home(),
            KeyCode::End | KeyCode::Char('G') => grid.move_end(total),
            _ => return false,
        };
        self.scroll = grid.scroll_to(self.cursor, self.scroll);
        true
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let AppMode::Prompt { input, .. } = &mut self.mode else {
            return;
        };

        match key.code {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Esc => self.mode = AppMode::Board,
            KeyCode::Enter => {
                let AppMode::Prompt { kind, input } =
                    std::mem::replace(&mut self.mode, AppMode::Board)
                else {
                    return;
                };
                self.submit_prompt(kind, input);
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        let AppMode::Confirm { action, .. } = self.mode else {
            return;
        };

        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.mode = AppMode::Board;
                self.perform(action);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = AppMode::Board;
                self.status = Some(self.info("Cancelled"));
            }
            _ => {}
        }
    }

    // ----- actions -----

    fn submit_prompt(&mut self, kind: PromptKind, input: String) {
        match kind {
            PromptKind::NewGroup => {
                let result = self.store.add_group(&input);
                self.apply(result);
            }
            PromptKind::LoadPath => {
                if input.trim().is_empty() {
                    return;
                }
                match card_file::read_card_file(&expand_path(&input)) {
                    Ok(file) if file.cards.is_empty() => self.report(StoreError::EmptySource),
                    Ok(file) => self.open_prompt(
                        PromptKind::LoadName { cards: file.cards },
                        file.suggested_name,
                    ),
                    Err(e) => self.report(format!("{e:#}")),
                }
            }
            PromptKind::LoadName { cards } => {
                let result = self.store.load_group(&input, &cards);
                self.apply(result);
            }
            PromptKind::ExportPath => {
                if input.trim().is_empty() {
                    return;
                }
                let path = self.config.export_path(expand_path(&input));
                let written = self
                    .store
                    .export_active()
                    .map_err(anyhow::Error::from)
                    .and_then(|text| card_file::write_card_file(&path, &text));
                match written {
                    Ok(()) => {
                        self.status = Some(self.info(format!(
                            "Exported '{}' to {}",
                            self.store.active_group().name,
                            path.display()
                        )))
                    }
                    Err(e) => self.report(format!("{e:#}")),
                }
            }
            PromptKind::RenameCard { index } => {
                let result = self.store.rename_card(index, &input);
                self.apply(result);
            }
            PromptKind::AppendCard => {
                let result = self.store.append_card(&input);
                if let Ok(index) = result {
                    self.cursor = index;
                }
                self.apply(result);
            }
        }
    }

    fn perform(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::DeleteGroup { index } => {
                let result = self.store.delete_group(index);
                self.apply(result);
            }
            ConfirmAction::DeleteCard { index } => {
                let result = self.store.delete_card(index);
                self.apply(result);
            }
            ConfirmAction::DeleteSelected => {
                let result = self.store.delete_selected();
                self.apply(result);
            }
            ConfirmAction::RestoreDefault => {
                let result = self.store.restore_default();
                self.apply(result);
            }
        }
    }

    fn cycle_group(&mut self, forward: bool) {
        let len = self.store.groups().len();
        let active = self.store.active_index();
        let index = if forward {
            (active + 1) % len
        } else {
            (active + len - 1) % len
        };
        let result = self.store.switch_group(index);
        self.apply(result);
    }

    fn open_prompt(&mut self, kind: PromptKind, input: String) {
        self.mode = AppMode::Prompt { kind, input };
    }

    /// Ask first when configured to, otherwise act immediately
    fn confirm(&mut self, action: ConfirmAction, question: String) {
        if self.config.behavior.confirm_destructive {
            self.mode = AppMode::Confirm { action, question };
        } else {
            self.perform(action);
        }
    }

    // ----- store feedback -----

    fn apply<T>(&mut self, result: Result<T, StoreError>) {
        match result {
            Ok(_) => self.sync(),
            Err(e) => self.report(e),
        }
    }

    /// Drain store events into the status line and keep the cursor valid
    fn sync(&mut self) {
        let mut message = None;
        for event in self.store.drain_events() {
            if let StoreEvent::ActiveChanged { .. } = event {
                self.cursor = 0;
                self.scroll = 0;
            }
            if message.is_none() {
                message = self.describe(&event);
            }
        }

        self.cursor = self.cursor.min(self.card_count().saturating_sub(1));
        if let Some(text) = message {
            tracing::debug!("{}", text);
            self.status = Some(self.info(text));
        }
    }

    fn describe(&self, event: &StoreEvent) -> Option<String> {
        let group = self.store.active_group();
        let text = match event {
            StoreEvent::GroupAdded { name, .. } => format!("Added group '{name}'"),
            StoreEvent::GroupLoaded { name, cards, .. } => {
                format!("Loaded group '{name}' ({cards} cards)")
            }
            StoreEvent::GroupDeleted { name } => format!("Deleted group '{name}'"),
            StoreEvent::ActiveChanged { .. } => {
                format!("Using '{}' ({} cards)", group.name, group.len())
            }
            StoreEvent::CardDrawn { card, remaining: 0, .. } => {
                format!("Drew {card} | all cards have been drawn")
            }
            StoreEvent::CardDrawn { card, remaining, .. } => {
                format!("Drew {card} | {remaining} left")
            }
            StoreEvent::CardToggled { index, drawn } => {
                let card = group.cards.get(*index)?;
                if *drawn {
                    format!("Marked {card} as drawn")
                } else {
                    format!("Returned {card} to the pool")
                }
            }
            StoreEvent::DrawReset => "All cards returned to the pool".to_string(),
            StoreEvent::ModeChanged(Mode::Editing) => format!("Editing '{}'", group.name),
            StoreEvent::ModeChanged(Mode::Browsing) => {
                format!("Saved '{}' ({} cards)", group.name, group.len())
            }
            StoreEvent::CardsEdited { cards } => format!("'{}' now has {cards} cards", group.name),
            StoreEvent::DefaultRestored { name } => format!("Restored '{name}' to defaults"),
        };
        Some(text)
    }

    fn report(&mut self, error: impl fmt::Display) {
        let text = error.to_string();
        tracing::warn!("{}", text);
        self.status = Some(StatusMessage {
            text,
            level: StatusLevel::Warning,
        });
    }

    fn info(&self, text: impl Into<String>) -> StatusMessage {
        StatusMessage {
            text: text.into(),
            level: StatusLevel::Info,
        }
    }

    fn card_count(&self) -> usize {
        self.store.active_group().len()
    }
}
