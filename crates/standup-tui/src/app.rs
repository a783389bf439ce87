use chrono::NaiveDate;
use crossterm::{
    event::{KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use standup_core::{InputState, SelectionState, StandupResult};
use standup_domain::{query, EntityStore, EntryField, MemberId, Sprint, SprintId, SprintStatus};

use crate::dialog::{handle_text_input, DialogAction};
use crate::events::{Event, EventHandler};
use crate::forms::{AnswerEditorState, MemberFormState, SprintField, SprintFormState};
use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Standup,
    Sprints,
    Reports,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Standup, Tab::Sprints, Tab::Reports];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Standup => "Daily Standup",
            Tab::Sprints => "Sprints",
            Tab::Reports => "Reports",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    SprintForm,
    MemberForm,
    EditAnswer,
    EditDate,
}

/// Which panel has focus on the Sprints tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprintsFocus {
    Sprints,
    Members,
}

pub struct App {
    pub should_quit: bool,
    pub tab: Tab,
    pub mode: AppMode,
    pub store: EntityStore,

    /// Session state the queries take as parameters: the date under
    /// review and the sprint the standup/dashboard views operate
    /// against. The pointer is independent of any sprint's `status`.
    pub selected_date: NaiveDate,
    pub active_sprint: Option<SprintId>,

    pub recent_limit: usize,

    pub standup_selection: SelectionState,
    /// Which of the three answers is focused on the Standup tab.
    pub field_cursor: usize,

    pub sprints_focus: SprintsFocus,
    pub sprint_selection: SelectionState,
    pub member_selection: SelectionState,

    pub report_scroll: usize,

    pub sprint_form: Option<SprintFormState>,
    pub member_form: Option<MemberFormState>,
    pub answer_editor: Option<AnswerEditorState>,
    pub date_input: Option<InputState>,
}

impl App {
    pub fn new(store: EntityStore, selected_date: NaiveDate, recent_limit: usize) -> Self {
        // Adopt the first already-running sprint as the session sprint,
        // so the demo fixture lands on a usable standup view.
        let active_sprint = store
            .sprints()
            .iter()
            .find(|s| s.status == SprintStatus::Active)
            .map(|s| s.id);

        Self {
            should_quit: false,
            tab: Tab::Dashboard,
            mode: AppMode::Normal,
            store,
            selected_date,
            active_sprint,
            recent_limit,
            standup_selection: SelectionState::new(),
            field_cursor: 0,
            sprints_focus: SprintsFocus::Sprints,
            sprint_selection: SelectionState::new(),
            member_selection: SelectionState::new(),
            report_scroll: 0,
            sprint_form: None,
            member_form: None,
            answer_editor: None,
            date_input: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The sprint the session pointer currently designates, if it still
    /// resolves.
    pub fn active_sprint_ref(&self) -> Option<&Sprint> {
        self.active_sprint.and_then(|id| self.store.sprint(id))
    }

    /// Ids of the active sprint's members shown on the Standup tab.
    pub fn visible_members(&self) -> Vec<MemberId> {
        query::sprint_members(self.store.members(), self.active_sprint_ref())
            .iter()
            .map(|m| m.id)
            .collect()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::SprintForm => self.handle_sprint_form_key(key),
            AppMode::MemberForm => self.handle_member_form_key(key),
            AppMode::EditAnswer => self.handle_answer_key(key),
            AppMode::EditDate => self.handle_date_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Char('1') => self.tab = Tab::Dashboard,
            KeyCode::Char('2') => self.tab = Tab::Standup,
            KeyCode::Char('3') => self.tab = Tab::Sprints,
            KeyCode::Char('4') => self.tab = Tab::Reports,
            KeyCode::Tab => self.tab = self.tab.next(),
            _ => match self.tab {
                Tab::Dashboard => {}
                Tab::Standup => self.handle_standup_key(key),
                Tab::Sprints => self.handle_sprints_key(key),
                Tab::Reports => self.handle_reports_key(key),
            },
        }
    }

    fn handle_standup_key(&mut self, key: KeyEvent) {
        let members = self.visible_members();
        self.standup_selection.clamp(members.len());

        match key.code {
            KeyCode::Char('d') => {
                self.date_input = Some(InputState::with_text(
                    self.selected_date.format("%Y-%m-%d").to_string(),
                ));
                self.mode = AppMode::EditDate;
            }
            KeyCode::Char('j') | KeyCode::Down => self.standup_selection.next(members.len()),
            KeyCode::Char('k') | KeyCode::Up => self.standup_selection.prev(),
            KeyCode::Char('h') | KeyCode::Left => {
                self.field_cursor = self.field_cursor.saturating_sub(1);
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.field_cursor = (self.field_cursor + 1).min(EntryField::ALL.len() - 1);
            }
            KeyCode::Enter => self.open_answer_editor(&members),
            _ => {}
        }
    }

    fn open_answer_editor(&mut self, members: &[MemberId]) {
        let Some(sprint_id) = self.active_sprint else {
            return;
        };
        let Some(&member_id) = self.standup_selection.get().and_then(|idx| members.get(idx))
        else {
            return;
        };

        let field = EntryField::ALL[self.field_cursor];
        let current = query::entry_value(
            self.store.entries(),
            self.selected_date,
            sprint_id,
            member_id,
            field,
        )
        .to_string();

        self.answer_editor = Some(AnswerEditorState::new(member_id, field, &current));
        self.mode = AppMode::EditAnswer;
    }

    fn handle_sprints_key(&mut self, key: KeyEvent) {
        self.sprint_selection.clamp(self.store.sprints().len());
        self.member_selection.clamp(self.store.members().len());

        match key.code {
            KeyCode::Char('h') | KeyCode::Left => self.sprints_focus = SprintsFocus::Sprints,
            KeyCode::Char('l') | KeyCode::Right => self.sprints_focus = SprintsFocus::Members,
            KeyCode::Char('j') | KeyCode::Down => match self.sprints_focus {
                SprintsFocus::Sprints => self.sprint_selection.next(self.store.sprints().len()),
                SprintsFocus::Members => self.member_selection.next(self.store.members().len()),
            },
            KeyCode::Char('k') | KeyCode::Up => match self.sprints_focus {
                SprintsFocus::Sprints => self.sprint_selection.prev(),
                SprintsFocus::Members => self.member_selection.prev(),
            },
            KeyCode::Char('n') => match self.sprints_focus {
                SprintsFocus::Sprints => {
                    self.sprint_form = Some(SprintFormState::blank(self.selected_date));
                    self.mode = AppMode::SprintForm;
                }
                SprintsFocus::Members => {
                    self.member_form = Some(MemberFormState::blank());
                    self.mode = AppMode::MemberForm;
                }
            },
            KeyCode::Char('e') => match self.sprints_focus {
                SprintsFocus::Sprints => {
                    if let Some(sprint) = self
                        .sprint_selection
                        .get()
                        .and_then(|idx| self.store.sprints().get(idx))
                    {
                        self.sprint_form = Some(SprintFormState::edit(sprint));
                        self.mode = AppMode::SprintForm;
                    }
                }
                SprintsFocus::Members => {
                    if let Some(member) = self
                        .member_selection
                        .get()
                        .and_then(|idx| self.store.members().get(idx))
                    {
                        self.member_form = Some(MemberFormState::edit(member));
                        self.mode = AppMode::MemberForm;
                    }
                }
            },
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.sprints_focus == SprintsFocus::Sprints {
                    if let Some(sprint) = self
                        .sprint_selection
                        .get()
                        .and_then(|idx| self.store.sprints().get(idx))
                    {
                        tracing::debug!(sprint = %sprint.id, "activating sprint");
                        self.active_sprint = Some(sprint.id);
                        self.standup_selection.clear();
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_reports_key(&mut self, key: KeyEvent) {
        let max = self.store.entries().len().saturating_sub(1);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.report_scroll = (self.report_scroll + 1).min(max);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.report_scroll = self.report_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn handle_sprint_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.sprint_form = None;
                self.mode = AppMode::Normal;
            }
            KeyCode::Enter => {
                let Some(state) = self.sprint_form.take() else {
                    self.mode = AppMode::Normal;
                    return;
                };
                match state.to_form() {
                    Some(form) => {
                        self.store.save_sprint(form, state.editing);
                        self.sprint_selection.clamp(self.store.sprints().len());
                        self.mode = AppMode::Normal;
                    }
                    // Unparseable dates keep the dialog open.
                    None => self.sprint_form = Some(state),
                }
            }
            KeyCode::Tab | KeyCode::Down => {
                if let Some(form) = self.sprint_form.as_mut() {
                    form.focus = form.focus.next();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(form) = self.sprint_form.as_mut() {
                    form.focus = form.focus.prev();
                }
            }
            _ => {
                let active_ids: Vec<MemberId> = self
                    .store
                    .members()
                    .iter()
                    .filter(|m| m.active)
                    .map(|m| m.id)
                    .collect();
                if let Some(form) = self.sprint_form.as_mut() {
                    if form.focus == SprintField::Members {
                        match key.code {
                            KeyCode::Char('j') => form.member_cursor.next(active_ids.len()),
                            KeyCode::Char('k') => form.member_cursor.prev(),
                            KeyCode::Char(' ') => {
                                if let Some(&id) = form
                                    .member_cursor
                                    .get()
                                    .and_then(|idx| active_ids.get(idx))
                                {
                                    form.toggle_member(id);
                                }
                            }
                            _ => {}
                        }
                    } else if let Some(input) = form.focused_input() {
                        // Enter and Esc were consumed above; the rest edits text.
                        let _ = handle_text_input(input, key.code);
                    }
                }
            }
        }
    }

    fn handle_member_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.member_form = None;
                self.mode = AppMode::Normal;
            }
            KeyCode::Enter => {
                if let Some(state) = self.member_form.take() {
                    self.store.save_member(state.to_form(), state.editing);
                    self.member_selection.clamp(self.store.members().len());
                }
                self.mode = AppMode::Normal;
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::BackTab | KeyCode::Up => {
                if let Some(form) = self.member_form.as_mut() {
                    form.focus = form.focus.next();
                }
            }
            _ => {
                if let Some(form) = self.member_form.as_mut() {
                    let _ = handle_text_input(form.focused_input(), key.code);
                }
            }
        }
    }

    fn handle_answer_key(&mut self, key: KeyEvent) {
        let action = match self.answer_editor.as_mut() {
            Some(editor) => handle_text_input(&mut editor.input, key.code),
            None => DialogAction::Cancel,
        };

        match action {
            DialogAction::None => {}
            DialogAction::Cancel => {
                self.answer_editor = None;
                self.mode = AppMode::Normal;
            }
            DialogAction::Confirm => {
                if let Some(editor) = self.answer_editor.take() {
                    if let Some(sprint_id) = self.active_sprint {
                        self.store.upsert_standup_field(
                            self.selected_date,
                            sprint_id,
                            editor.member_id,
                            editor.field,
                            editor.input.as_str().to_string(),
                        );
                    }
                }
                self.mode = AppMode::Normal;
            }
        }
    }

    fn handle_date_key(&mut self, key: KeyEvent) {
        let action = match self.date_input.as_mut() {
            Some(input) => handle_text_input(input, key.code),
            None => DialogAction::Cancel,
        };

        match action {
            DialogAction::None => {}
            DialogAction::Cancel => {
                self.date_input = None;
                self.mode = AppMode::Normal;
            }
            DialogAction::Confirm => {
                let parsed = self
                    .date_input
                    .as_ref()
                    .and_then(|input| NaiveDate::parse_from_str(input.as_str(), "%Y-%m-%d").ok());
                // An unparseable date keeps the dialog open.
                if let Some(date) = parsed {
                    self.selected_date = date;
                    self.standup_selection.clear();
                    self.date_input = None;
                    self.mode = AppMode::Normal;
                }
            }
        }
    }

    pub async fn run(&mut self) -> StandupResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            if let Some(event) = events.next().await {
                match event {
                    Event::Key(key) => self.handle_key(key),
                    Event::Tick => {}
                }
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
