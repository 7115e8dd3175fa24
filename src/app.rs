use std::sync::Arc;
use std::time::Duration;

use iced::task;
use iced::widget::{column, container};
use iced::window;
use iced::{event, keyboard, Element, Fill, Padding, Subscription, Task, Theme};

use birdsearch::config::Config;
use birdsearch::error::FetchError;
use birdsearch::search::{Direction, Effect, Request, Search, Ticket};
use birdsearch::source::{Suggestion, SuggestionSource};

use crate::ui::{result_list, search_input, status, theme};

pub struct State {
    source: Arc<dyn SuggestionSource>,
    search: Search,

    // Scheduled work. Handles abort on drop, so replacing one cancels the
    // previous timer/request and dropping State cancels everything.
    /// Pending debounce timer
    debounce: Option<task::Handle>,
    /// In-flight suggestion request
    request: Option<task::Handle>,
    /// Timer that hides the typing indicator
    typing: Option<task::Handle>,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    DebounceElapsed(Ticket),
    SuggestionsFetched(Ticket, Result<Vec<Suggestion>, FetchError>),
    TypingSettled(Ticket),
    Submit,
    Select(i64),
    Hovered(usize),
    PointerLeft,
    Clear,
    KeyEvent(keyboard::Event),
    CloseRequested(window::Id),
}

impl State {
    pub fn new(config: Config, source: Arc<dyn SuggestionSource>) -> (Self, Task<Message>) {
        // Host callback: hand the selected id to whoever launched us
        let search = Search::new(config.search).with_on_select(|id| println!("{id}"));

        let state = Self {
            source,
            search,
            debounce: None,
            request: None,
            typing: None,
        };

        (state, iced::widget::operation::focus(search_input::SEARCH_INPUT_ID))
    }

    pub fn title(&self) -> String {
        String::from("Bird Search")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                let effect = self.search.set_query(query);
                let typing = self.schedule_typing_settle();
                Task::batch([self.apply(effect), typing])
            }
            Message::DebounceElapsed(ticket) => match self.search.debounce_elapsed(ticket) {
                Some(request) => {
                    self.debounce = None;
                    self.send(request)
                }
                None => Task::none(),
            },
            Message::SuggestionsFetched(ticket, result) => {
                if self.search.resolve(ticket, result) {
                    self.request = None;
                }
                Task::none()
            }
            Message::TypingSettled(ticket) => {
                self.search.settle_typing(ticket);
                Task::none()
            }
            Message::Submit => {
                let effect = self.search.submit();
                self.apply(effect)
            }
            Message::Select(id) => {
                let effect = self.search.select(id);
                self.apply(effect)
            }
            Message::Hovered(index) => {
                self.search.hover(index);
                Task::none()
            }
            Message::PointerLeft => {
                self.search.leave_list();
                Task::none()
            }
            Message::Clear => {
                let effect = self.search.clear();
                Task::batch([
                    self.apply(effect),
                    iced::widget::operation::focus(search_input::SEARCH_INPUT_ID),
                ])
            }
            Message::KeyEvent(kb_event) => {
                let keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(named),
                    ..
                } = kb_event
                else {
                    return Task::none();
                };
                match named {
                    keyboard::key::Named::ArrowDown => {
                        self.search.navigate(Direction::Down);
                        Task::none()
                    }
                    keyboard::key::Named::ArrowUp => {
                        self.search.navigate(Direction::Up);
                        Task::none()
                    }
                    // The input drops focus on Escape; take it back so typing continues
                    keyboard::key::Named::Escape => {
                        let effect = self.search.escape();
                        Task::batch([
                            self.apply(effect),
                            iced::widget::operation::focus(search_input::SEARCH_INPUT_ID),
                        ])
                    }
                    // Only reaches here when the input is not focused;
                    // otherwise the input submits
                    keyboard::key::Named::Enter => {
                        let effect = self.search.submit();
                        self.apply(effect)
                    }
                    _ => Task::none(),
                }
            }
            Message::CloseRequested(id) => {
                tracing::info!("Window {:?} closing, cancelling pending work", id);
                let effect = self.search.shutdown();
                let _ = self.apply(effect);
                self.typing = None;
                iced::exit()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let search = &self.search;
        let state = search.state();

        let mut content = column![].spacing(8).padding(Padding::new(16.0)).height(Fill);

        if let Some(id) = state.selected_id {
            content = content.push(status::selected(id));
        }
        content = content.push(search_input::view(
            search.query(),
            &search.config().placeholder,
            search.is_busy(),
        ));
        if !state.suggestions.is_empty() {
            content = content.push(result_list::view(search));
        }
        if !state.message.is_empty() {
            content = content.push(status::message(&state.message));
        }
        if search.shows_no_results() {
            content = content.push(status::empty_state());
        }

        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::main_container)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            window::close_requests().map(Message::CloseRequested),
            event::listen_with(|event, status, _window| match event {
                iced::Event::Keyboard(kb_event) => {
                    if matches!(status, event::Status::Ignored) {
                        Some(Message::KeyEvent(kb_event))
                    } else {
                        // The focused input swallows Escape; the dropdown still needs it
                        match &kb_event {
                            keyboard::Event::KeyPressed {
                                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                                ..
                            } => Some(Message::KeyEvent(kb_event)),
                            _ => None,
                        }
                    }
                }
                _ => None,
            }),
        ])
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    // ---- Scheduling ----

    fn apply(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::Debounce { ticket, delay } => {
                let (task, handle) = after(delay, Message::DebounceElapsed(ticket));
                self.debounce = Some(handle);
                task
            }
            Effect::Cancel => {
                self.debounce = None;
                self.request = None;
                Task::none()
            }
        }
    }

    fn send(&mut self, request: Request) -> Task<Message> {
        let Request { ticket, query } = request;
        tracing::debug!("Fetching '{}' from {}", query, self.source.name());

        let (task, handle) = Task::perform(self.source.fetch(query), move |result| {
            Message::SuggestionsFetched(ticket, result)
        })
        .abortable();
        self.request = Some(handle.abort_on_drop());
        task
    }

    fn schedule_typing_settle(&mut self) -> Task<Message> {
        let ticket = self.search.typing_ticket();
        let (task, handle) = after(
            self.search.config().loading_delay(),
            Message::TypingSettled(ticket),
        );
        self.typing = Some(handle);
        task
    }
}

/// Deliver `message` after `delay`. The returned handle aborts the timer
/// when dropped.
fn after(delay: Duration, message: Message) -> (Task<Message>, task::Handle) {
    let (task, handle) = Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |_| message,
    )
    .abortable();
    (task, handle.abort_on_drop())
}
