//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the board
//! lifecycle: mounting, message handling, request outcomes and rendering.

use std::sync::Arc;

use idea_board_client::IdeaApi;
use idea_board_config::Branding;
use idea_board_protocol::Message;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
};
use tracing::{debug, info};

use crate::{
    BoardState,
    event::{event_to_message, poll_event},
    layout::{
        FOOTER_HEIGHT, HEADER_HEIGHT, INPUT_HEIGHT, MIN_HEIGHT, MIN_WIDTH, STATUS_BAR_HEIGHT,
    },
    requests::{ApiEvent, Requests},
    terminal::AppTerminal,
    widgets::{
        error_line_height, render_error_line, render_footer, render_header, render_help_overlay,
        render_idea_list, render_input, render_status_bar,
    },
};

/// The board controller.
///
/// Owns the board state and the running requests. Dropping the app aborts
/// any request still in flight.
#[derive(Debug)]
pub struct App {
    state: BoardState,
    requests: Requests,
    branding: Branding,
    should_quit: bool,
    mounted: bool,
}

impl App {
    /// Creates a board that talks to `api` and shows `branding` in its footer.
    ///
    /// Nothing is fetched until [`App::mount`] (or [`App::run`]) is called.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::{sync::Arc, time::Duration};
    /// use idea_board_client::HttpIdeaApi;
    /// use idea_board_config::Branding;
    /// use idea_board_tui::App;
    ///
    /// let api = HttpIdeaApi::new("http://localhost:8000".parse().unwrap(), Duration::from_secs(10))
    ///     .expect("client");
    /// let app = App::new(Arc::new(api), Branding::default());
    /// assert!(!app.should_quit());
    /// ```
    #[must_use]
    pub fn new(api: Arc<dyn IdeaApi>, branding: Branding) -> Self {
        Self {
            state: BoardState::new(),
            requests: Requests::new(api),
            branding,
            should_quit: false,
            mounted: false,
        }
    }

    /// Returns a reference to the board state.
    #[must_use]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Returns the branding shown in the footer.
    #[must_use]
    pub fn branding(&self) -> &Branding {
        &self.branding
    }

    /// Returns whether the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the number of requests still running.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.requests.in_flight()
    }

    /// Starts the list fetch and the cloud-info lookup.
    ///
    /// Only the first call has an effect.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        info!("mounting idea board");
        self.refresh();
        self.requests.fetch_cloud_info();
    }

    /// Enters the loading state and refetches the list.
    pub fn refresh(&mut self) {
        self.state.begin_fetch();
        self.requests.fetch_ideas();
    }

    /// Submits the current draft.
    ///
    /// A draft that is blank after trimming sends nothing.
    pub fn submit(&mut self) {
        let Some(idea) = self.state.prepare_submission() else {
            return;
        };
        debug!(length = idea.content.chars().count(), "submitting idea");
        self.requests.submit(idea);
    }

    /// Updates the board based on a message.
    ///
    /// While the help overlay is visible, every message other than `Quit`
    /// only dismisses it.
    pub fn update(&mut self, msg: Message) {
        if self.state.help_visible {
            match msg {
                Message::Quit => self.should_quit = true,
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        match msg {
            Message::Quit => self.should_quit = true,
            Message::Input { ch } => {
                let _ = self.state.input_char(ch);
            }
            Message::Backspace => self.state.backspace(),
            Message::ClearDraft => self.state.clear_draft(),
            Message::Submit => self.submit(),
            Message::Refresh => self.refresh(),
            Message::ScrollUp => self.state.scroll_up(),
            Message::ScrollDown => self.state.scroll_down(),
            Message::ToggleHelp => self.state.toggle_help(),
            // Nothing to dismiss
            Message::Escape => {}
        }
    }

    /// Applies a finished request to the board.
    ///
    /// A successful submission triggers a full refetch.
    pub fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::IdeasFetched(result) => self.state.apply_fetch(result),
            ApiEvent::IdeaSubmitted(result) => {
                if self.state.apply_submission(result) {
                    self.refresh();
                }
            }
            ApiEvent::CloudInfoFetched(result) => self.state.apply_cloud_info(result),
        }
    }

    /// Applies every request outcome that is already available.
    pub fn drain_responses(&mut self) {
        while let Some(event) = self.requests.try_next() {
            self.handle_api_event(event);
        }
    }

    /// Waits until no request is running, applying outcomes as they arrive.
    ///
    /// Requests started while settling (such as the refetch after a
    /// submission) are waited for as well.
    pub async fn settle(&mut self) {
        while let Some(event) = self.requests.next().await {
            self.handle_api_event(event);
        }
    }

    /// Renders the board to the given frame.
    ///
    /// Below the minimum size only a "terminal too small" message is shown.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            Self::render_terminal_too_small(frame, area);
            return;
        }

        let [header, input, error, list, footer, status] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(error_line_height(self.state.error(), area.width)),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        let buf = frame.buffer_mut();
        render_header(&self.state.cloud, header, buf);
        let cursor = render_input(&self.state.draft, input, buf);
        render_error_line(self.state.error(), error, buf);
        render_idea_list(&self.state, list, buf);
        render_footer(&self.branding, footer, buf);
        render_status_bar(status, buf);

        if self.state.help_visible {
            render_help_overlay(area, buf);
        } else if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Mounts the board and runs the main loop until the user quits.
    ///
    /// Request outcomes are applied between frames.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::{sync::Arc, time::Duration};
    /// use idea_board_client::HttpIdeaApi;
    /// use idea_board_config::Branding;
    /// use idea_board_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let api = HttpIdeaApi::new("http://localhost:8000".parse()?, Duration::from_secs(10))?;
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(Arc::new(api), Branding::default());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        self.mount();

        loop {
            self.drain_responses();
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event)
            {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }
        }

        info!(in_flight = self.in_flight(), "idea board closed");
        Ok(())
    }
}
