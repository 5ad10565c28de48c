use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use crossterm::{
    event::{KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dropdeck_core::{AppConfig, SelectionState};
use dropdeck_domain::{
    validate_draft, DraftOutcome, DragTransfer, ListProjection, Project, ProjectStatus,
    ProjectStore, TransferKind,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::events::{Event, EventHandler};
use crate::form::{FormAction, ProjectForm};
use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    CreateProject,
}

/// Top-level TUI state. Owns the injected store; the two list panels
/// see it through projections registered as store listeners, so every
/// mutation re-renders both lists from a fresh snapshot.
pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub focus: ProjectStatus,
    pub store: ProjectStore,
    pub drag: DragTransfer,
    pub form: ProjectForm,
    pub config: AppConfig,
    active_list: Rc<RefCell<ListProjection>>,
    finished_list: Rc<RefCell<ListProjection>>,
    active_selection: SelectionState,
    finished_selection: SelectionState,
}

impl App {
    pub fn new(mut store: ProjectStore, config: AppConfig) -> Self {
        let active_list = Rc::new(RefCell::new(ListProjection::new(ProjectStatus::Active)));
        let finished_list = Rc::new(RefCell::new(ListProjection::new(ProjectStatus::Finished)));

        for list in [&active_list, &finished_list] {
            let list = Rc::clone(list);
            store.add_listener(move |snapshot: Vec<Project>| list.borrow_mut().refresh(snapshot));
        }
        // Listeners only see future snapshots; pull the current one in
        // case the injected store is already populated.
        active_list.borrow_mut().refresh(store.snapshot());
        finished_list.borrow_mut().refresh(store.snapshot());

        let form = ProjectForm::new(config.effective_default_people());

        Self {
            should_quit: false,
            mode: AppMode::Normal,
            focus: ProjectStatus::Active,
            store,
            drag: DragTransfer::new(),
            form,
            config,
            active_list,
            finished_list,
            active_selection: SelectionState::new(),
            finished_selection: SelectionState::new(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn projection(&self, status: ProjectStatus) -> &Rc<RefCell<ListProjection>> {
        match status {
            ProjectStatus::Active => &self.active_list,
            ProjectStatus::Finished => &self.finished_list,
        }
    }

    pub fn selection(&self, status: ProjectStatus) -> &SelectionState {
        match status {
            ProjectStatus::Active => &self.active_selection,
            ProjectStatus::Finished => &self.finished_selection,
        }
    }

    fn selection_mut(&mut self, status: ProjectStatus) -> &mut SelectionState {
        match status {
            ProjectStatus::Active => &mut self.active_selection,
            ProjectStatus::Finished => &mut self.finished_selection,
        }
    }

    fn list_len(&self, status: ProjectStatus) -> usize {
        self.projection(status).borrow().len()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::CreateProject => self.handle_form_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Char('n') => {
                self.form.reset(self.config.effective_default_people());
                self.mode = AppMode::CreateProject;
            }
            KeyCode::Char('1') => self.set_focus(ProjectStatus::Active),
            KeyCode::Char('2') => self.set_focus(ProjectStatus::Finished),
            KeyCode::Tab => {
                let other = match self.focus {
                    ProjectStatus::Active => ProjectStatus::Finished,
                    ProjectStatus::Finished => ProjectStatus::Active,
                };
                self.set_focus(other);
            }
            KeyCode::Char('j') | KeyCode::Down => {
                let len = self.list_len(self.focus);
                self.selection_mut(self.focus).next(len);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selection_mut(self.focus).prev();
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.grab_or_drop(),
            KeyCode::Esc => self.drag.cancel(),
            _ => {}
        }
    }

    /// Switch the focused panel. While a drag is in flight the newly
    /// focused panel is hovered: the previous target is left and the new
    /// one arms itself if the payload marker matches.
    fn set_focus(&mut self, status: ProjectStatus) {
        if self.drag.is_dragging() && status != self.focus {
            self.drag.drag_leave();
            self.drag.drag_over(status, TransferKind::PlainText);
        }
        self.focus = status;
        let len = self.list_len(status);
        self.selection_mut(status).auto_select_first(len);
    }

    /// Space/Enter: pick up the selected project, or drop the one in
    /// flight onto the focused panel. The drop is the only path that
    /// moves a project.
    fn grab_or_drop(&mut self) {
        if self.drag.is_dragging() {
            if let Some((id, status)) = self.drag.drop_on(self.focus) {
                self.store.move_project(id, status);
                self.refresh_selections();
            }
            return;
        }

        let selected = self.selection(self.focus).get();
        let grabbed = selected.and_then(|idx| {
            self.projection(self.focus)
                .borrow()
                .get(idx)
                .map(|project| project.id)
        });
        if let Some(id) = grabbed {
            self.drag.start(id);
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match self.form.handle_key(key) {
            FormAction::None => {}
            FormAction::Cancel => {
                self.form.reset(self.config.effective_default_people());
                self.mode = AppMode::Normal;
            }
            FormAction::Submit => self.submit_form(),
        }
    }

    /// Validate the draft; only a fully valid one reaches the store. On
    /// success the fields are cleared and the popup closes, otherwise the
    /// first failing rule's message stays on screen.
    fn submit_form(&mut self) {
        match validate_draft(&self.form.draft()) {
            DraftOutcome::Valid {
                title,
                description,
                people,
            } => {
                self.store.add_project(title, description, people);
                self.form.reset(self.config.effective_default_people());
                self.mode = AppMode::Normal;
                self.refresh_selections();
            }
            DraftOutcome::Invalid(message) => {
                self.form.error = Some(message);
            }
        }
    }

    /// Keep both panel selections valid after the lists change size.
    fn refresh_selections(&mut self) {
        for status in [ProjectStatus::Active, ProjectStatus::Finished] {
            let len = self.list_len(status);
            let selection = self.selection_mut(status);
            selection.clamp(len);
            selection.auto_select_first(len);
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            match events.next().await {
                Some(Event::Key(key)) => self.handle_key(key),
                Some(Event::Tick) => {}
                None => break,
            }
        }

        events.stop();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}
