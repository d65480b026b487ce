use std::sync::Arc;

use cosmic::app::{Core, Task as CosmicTask, context_drawer};
use cosmic::iced::Length;
use cosmic::widget::{button, column, container, icon, nav_bar, row, scrollable};
use cosmic::{Application, Element, executor, theme};

use taskly::api::DashboardApi;
use taskly::config::{self, TasklyConfig};
use taskly::core::family::NewFamily;
use taskly::core::quick_task::NewQuickTask;
use taskly::dashboard::chart::fetch_chart_data;
use taskly::dashboard::quick_tasks::delete_quick_tasks;
use taskly::dashboard::{Epoch, NavTarget, Navigation, ROOT_PATH, Session, messages};
use taskly::store::LocalStore;

use crate::components::create_dialog::{CreateDialog, create_dialog};
use crate::components::team_list::team_list;
use crate::message::{DialogKind, Message, NavTargetExt};
use crate::pages;

const SIDE_PANEL_WIDTH: f32 = 260.0;

pub struct Flags {
    pub config: TasklyConfig,
    pub store: LocalStore,
    pub api: Arc<dyn DashboardApi>,
}

pub struct Taskly {
    core: Core,
    nav_model: nav_bar::Model,
    config: TasklyConfig,
    store: LocalStore,
    api: Arc<dyn DashboardApi>,
    page: NavTarget,
    session: Option<Session>,
    /// Last epoch handed to [`Session::mount`].
    epoch: Epoch,

    // Creation drawer
    dialog: Option<CreateDialog>,

    // Signed-out screen
    token_input: String,

    last_refreshed: Option<String>,
}

impl Application for Taskly {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = config::APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let mut nav_model = nav_bar::Model::default();
        for target in NavTarget::ALL {
            nav_model
                .insert()
                .text(target.title())
                .icon(icon::from_name(target.icon_name()).icon())
                .data(target);
        }
        nav_model.activate_position(0);

        log::info!("Using API at {}", flags.config.api_base());

        let mut app = Self {
            core,
            nav_model,
            config: flags.config,
            store: flags.store,
            api: flags.api,
            page: NavTarget::Dashboard,
            session: None,
            epoch: 0,
            dialog: None,
            token_input: String::new(),
            last_refreshed: None,
        };

        let task = if app.store.token().is_some() {
            app.start_session()
        } else {
            log::info!("No token stored, showing sign-in");
            CosmicTask::none()
        };

        (app, task)
    }

    fn nav_model(&self) -> Option<&nav_bar::Model> {
        self.session.as_ref().map(|_| &self.nav_model)
    }

    fn on_nav_select(&mut self, id: nav_bar::Id) -> CosmicTask<Message> {
        if let Some(target) = self.nav_model.data::<NavTarget>(id).copied() {
            log::debug!("Navigating to {}", target.href());
            self.page = target;
            self.nav_model.activate(id);
        }
        CosmicTask::none()
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            Message::Refresh => {
                if self.session.is_some() {
                    return self.refresh();
                }
            }

            Message::Logout => {
                let nav = match self.session.as_mut() {
                    Some(session) => session.sidebar.logout(),
                    None => {
                        if let Err(e) = self.store.clear() {
                            log::error!("Failed to clear local store on logout: {}", e);
                        }
                        Navigation::FullLoad { path: ROOT_PATH }
                    }
                };
                return self.navigate(nav);
            }

            Message::TokenInputChanged(value) => {
                self.token_input = value;
            }

            Message::SignIn => {
                let token = self.token_input.trim().to_string();
                if token.is_empty() {
                    return CosmicTask::none();
                }
                if let Err(e) = self.store.set_token(&token) {
                    log::error!("Failed to store token: {}", e);
                    return CosmicTask::none();
                }
                self.token_input.clear();
                log::info!("Signed in");
                return self.start_session();
            }

            // Notes
            Message::NoteDraftChanged(value) => {
                if let Some(session) = self.session.as_mut() {
                    session.notes.set_draft(value);
                }
            }

            Message::NoteSubmit => {
                if let Some(session) = self.session.as_mut() {
                    session.notes.submit_draft();
                }
            }

            Message::DeleteNote(index) => {
                if let Some(session) = self.session.as_mut() {
                    session.notes.delete(index);
                }
            }

            // Quick tasks
            Message::QuickTasksLoaded(epoch, result) => {
                let nav = self.live_session(epoch).and_then(|s| s.apply_quick_tasks(result));
                if let Some(nav) = nav {
                    return self.navigate(nav);
                }
            }

            Message::ToggleQuickTask(id) => {
                if let Some(session) = self.session.as_mut() {
                    session.quick_tasks.toggle_selection(id);
                }
            }

            Message::DeleteSelectedQuickTasks => {
                let Some(session) = self.session.as_ref() else {
                    return CosmicTask::none();
                };
                let ids = session.quick_tasks.selected_ids();
                if ids.is_empty() {
                    return CosmicTask::none();
                }
                let api = self.api.clone();
                let epoch = self.epoch;
                return CosmicTask::perform(
                    async move { delete_quick_tasks(api.as_ref(), ids).await },
                    move |outcome| cosmic::Action::App(Message::QuickTasksDeleted(epoch, outcome)),
                );
            }

            Message::QuickTasksDeleted(epoch, outcome) => {
                let failed = outcome.failed.is_some();
                let Some(session) = self.live_session(epoch) else {
                    return CosmicTask::none();
                };
                if session.quick_tasks.apply_delete(outcome) {
                    let api = self.api.clone();
                    return CosmicTask::perform(
                        async move { api.list_quick_tasks().await },
                        move |result| cosmic::Action::App(Message::QuickTasksReloaded(epoch, failed, result)),
                    );
                }
            }

            Message::QuickTasksReloaded(epoch, delete_failed, result) => {
                if let Some(session) = self.live_session(epoch) {
                    session.quick_tasks.apply_reload(result, delete_failed);
                }
            }

            // Families
            Message::FamiliesLoaded(epoch, result) => {
                let nav = self.live_session(epoch).and_then(|s| s.apply_families(result));
                if let Some(nav) = nav {
                    return self.navigate(nav);
                }
            }

            Message::DeleteFamily(id) => {
                if self.session.is_none() {
                    return CosmicTask::none();
                }
                let api = self.api.clone();
                let epoch = self.epoch;
                return CosmicTask::perform(
                    async move { api.delete_family(id).await },
                    move |result| cosmic::Action::App(Message::FamilyDeleted(epoch, id, result)),
                );
            }

            Message::FamilyDeleted(epoch, id, result) => {
                let nav = match self.live_session(epoch) {
                    Some(session) => session.sidebar.apply_delete(id, result),
                    None => None,
                };
                if let Some(nav) = nav {
                    return self.navigate(nav);
                }
            }

            // Chart
            Message::ChartLoaded(epoch, result) => {
                if let Some(session) = self.live_session(epoch) {
                    session.chart.apply_fetch(result);
                }
            }

            // Creation drawer
            Message::OpenDialog(kind) => {
                self.dialog = Some(CreateDialog::new(kind));
                self.core.window.show_context = true;
            }

            Message::CloseDialog => {
                self.close_dialog();
            }

            Message::DialogTitleChanged(value) => {
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.title = value;
                }
            }

            Message::DialogOptionSelected(index) => {
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.option = index;
                }
            }

            Message::DialogSubmit => {
                return self.submit_dialog();
            }

            Message::DialogFinished(epoch, kind, result) => {
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.submitting = false;
                }
                if self.live_session(epoch).is_none() {
                    return CosmicTask::none();
                }
                match result {
                    Ok(()) => {
                        log::info!("Created {:?}", kind);
                        self.close_dialog();
                        return match kind {
                            DialogKind::Family => CosmicTask::batch(vec![self.load_families(), self.load_chart()]),
                            DialogKind::QuickTask => self.load_quick_tasks(),
                        };
                    }
                    Err(e) => {
                        log::error!("Error creating {:?}: {}", kind, e);
                        if let Some(session) = self.session.as_mut() {
                            match kind {
                                DialogKind::Family => session.sidebar.fail(messages::CREATE_FAMILY),
                                DialogKind::QuickTask => session.quick_tasks.fail(messages::CREATE_QUICK_TASK),
                            }
                        }
                    }
                }
            }
        }

        CosmicTask::none()
    }

    fn header_end(&self) -> Vec<Element<'_, Message>> {
        if self.session.is_none() {
            return Vec::new();
        }

        let header_row = row()
            .spacing(4)
            .push(
                button::icon(icon::from_name("view-refresh-symbolic"))
                    .on_press(Message::Refresh),
            )
            .push(
                button::icon(icon::from_name("list-add-symbolic"))
                    .on_press(Message::OpenDialog(DialogKind::QuickTask)),
            )
            .push(
                button::icon(icon::from_name("system-users-symbolic"))
                    .on_press(Message::OpenDialog(DialogKind::Family)),
            )
            .push(
                button::icon(icon::from_name("system-log-out-symbolic"))
                    .on_press(Message::Logout),
            );

        vec![header_row.into()]
    }

    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Message>> {
        let dialog = self.dialog.as_ref()?;
        Some(
            context_drawer::context_drawer(
                container(scrollable(container(create_dialog(dialog)).padding(16)))
                    .width(Length::Fill),
                Message::CloseDialog,
            )
            .title(dialog.heading()),
        )
    }

    fn on_escape(&mut self) -> CosmicTask<Message> {
        self.close_dialog();
        CosmicTask::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let Some(session) = self.session.as_ref() else {
            return pages::signed_out::signed_out_view(&self.token_input);
        };

        let page = match self.page {
            NavTarget::Dashboard => pages::dashboard::dashboard_view(
                &session.quick_tasks,
                &session.notes,
                &session.chart,
                self.last_refreshed.as_deref(),
            ),
            NavTarget::Calendar => pages::calendar::calendar_view(),
            NavTarget::MyTasks => pages::my_tasks::my_tasks_view(&session.chart),
        };

        let teams = container(scrollable(team_list(&session.sidebar)))
            .padding(16)
            .width(Length::Fixed(SIDE_PANEL_WIDTH))
            .height(Length::Fill)
            .class(theme::Container::Card);

        row()
            .spacing(16)
            .padding(16)
            .push(teams)
            .push(column().width(Length::Fill).push(page))
            .into()
    }
}

impl Taskly {
    /// Session for results started under `epoch`, or `None` when it was torn down.
    fn live_session(&mut self, epoch: Epoch) -> Option<&mut Session> {
        self.session.as_mut().filter(|s| s.accepts(epoch))
    }

    /// Mount every widget from scratch and start their fetches.
    fn start_session(&mut self) -> CosmicTask<Message> {
        self.epoch += 1;
        let session = Session::mount(self.store.clone(), self.epoch);
        let needs_families = session.sidebar.needs_fetch();
        self.session = Some(session);
        self.stamp_refresh();

        let mut batch = vec![self.load_quick_tasks(), self.load_chart()];
        if needs_families {
            batch.push(self.load_families());
        }
        CosmicTask::batch(batch)
    }

    /// Refetch every server-backed widget in place. Writes still in flight
    /// keep their epoch and are applied when they finish.
    fn refresh(&mut self) -> CosmicTask<Message> {
        if let Some(session) = self.session.as_mut() {
            session.begin_refresh();
        }
        self.stamp_refresh();
        CosmicTask::batch(vec![self.load_quick_tasks(), self.load_chart(), self.load_families()])
    }

    fn navigate(&mut self, nav: Navigation) -> CosmicTask<Message> {
        match nav {
            Navigation::FullLoad { path } => {
                log::info!("Full load of {}", path);
                self.epoch += 1;
                self.session = None;
                self.last_refreshed = None;
                self.page = NavTarget::Dashboard;
                self.nav_model.activate_position(0);
                self.close_dialog();
                if path == ROOT_PATH || self.store.token().is_none() {
                    CosmicTask::none()
                } else {
                    self.start_session()
                }
            }
            Navigation::Reload => self.start_session(),
        }
    }

    fn load_quick_tasks(&self) -> CosmicTask<Message> {
        let api = self.api.clone();
        let epoch = self.epoch;
        CosmicTask::perform(
            async move { api.list_quick_tasks().await },
            move |result| cosmic::Action::App(Message::QuickTasksLoaded(epoch, result)),
        )
    }

    fn load_families(&self) -> CosmicTask<Message> {
        let api = self.api.clone();
        let epoch = self.epoch;
        CosmicTask::perform(
            async move { api.list_families().await },
            move |result| cosmic::Action::App(Message::FamiliesLoaded(epoch, result)),
        )
    }

    fn load_chart(&self) -> CosmicTask<Message> {
        let api = self.api.clone();
        let epoch = self.epoch;
        CosmicTask::perform(
            async move { fetch_chart_data(api.as_ref()).await },
            move |result| cosmic::Action::App(Message::ChartLoaded(epoch, result)),
        )
    }

    fn submit_dialog(&mut self) -> CosmicTask<Message> {
        let Some(dialog) = self.dialog.as_mut() else {
            return CosmicTask::none();
        };
        let title = dialog.title.trim().to_string();
        if title.is_empty() || dialog.submitting {
            return CosmicTask::none();
        }
        dialog.submitting = true;

        let kind = dialog.kind;
        let api = self.api.clone();
        let epoch = self.epoch;
        match kind {
            DialogKind::Family => {
                let family = NewFamily {
                    title,
                    color: dialog.color_token(),
                };
                CosmicTask::perform(
                    async move { api.create_family(&family).await },
                    move |result| cosmic::Action::App(Message::DialogFinished(epoch, kind, result)),
                )
            }
            DialogKind::QuickTask => {
                let task = NewQuickTask {
                    title,
                    kind: dialog.quick_task_type(),
                };
                CosmicTask::perform(
                    async move { api.create_quick_task(&task).await },
                    move |result| cosmic::Action::App(Message::DialogFinished(epoch, kind, result)),
                )
            }
        }
    }

    fn close_dialog(&mut self) {
        self.dialog = None;
        self.core.window.show_context = false;
    }

    fn stamp_refresh(&mut self) {
        self.last_refreshed = Some(chrono::Local::now().format("%H:%M").to_string());
    }
}
