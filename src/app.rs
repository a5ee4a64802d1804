use crate::{
    conversation::Conversation,
    errors::TalkResult,
    events::AppEvent,
    transport::ChatClient,
};
use log::{info, warn};
use tokio::sync::mpsc::UnboundedSender;

/// Which screen is showing. `Intro` is the initial state and `Chatting` is
/// terminal: the transition fires once, on the first accepted user message,
/// and there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Intro,
    Chatting,
}

pub struct App {
    pub screen: AppScreen,
    pub conversation: Conversation,
    client: ChatClient,
    reply_tx: UnboundedSender<AppEvent>,

    /// Vertical scroll offset into the rendered message lines. The view
    /// recomputes `max_scroll` on every draw and pins `scroll` to it while
    /// `stick_to_bottom` holds.
    pub scroll: u16,
    pub max_scroll: u16,
    /// Bottom-aware autoscroll: true while the viewport sits at the bottom.
    /// New bot content only pulls the view down when this is set, so a user
    /// reading history is never yanked back.
    pub stick_to_bottom: bool,

    pub in_flight: usize,
    /// Last send error, shown as a system notice in the status line rather
    /// than as a bot bubble. Cleared by the next accepted send.
    pub notice: Option<String>,
    pub input_focused: bool,
    pub spinner_idx: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(client: ChatClient, reply_tx: UnboundedSender<AppEvent>) -> App {
        App {
            screen: AppScreen::Intro,
            conversation: Conversation::new(),
            client,
            reply_tx,
            scroll: 0,
            max_scroll: 0,
            stick_to_bottom: true,
            in_flight: 0,
            notice: None,
            input_focused: true,
            spinner_idx: 0,
            should_quit: false,
        }
    }

    /// Accepts the current draft and fires off the request. Rejected (empty)
    /// drafts change nothing. There is no in-flight guard: a second send
    /// while the first is pending simply runs a second concurrent request,
    /// and the replies land in arrival order.
    pub fn submit_draft(&mut self) {
        let Some(text) = self.conversation.append_user_message() else {
            return;
        };

        if self.screen == AppScreen::Intro {
            self.screen = AppScreen::Chatting;
        }
        self.stick_to_bottom = true;
        self.notice = None;
        self.in_flight += 1;
        info!("sending message ({} chars)", text.len());

        let client = self.client.clone();
        let tx = self.reply_tx.clone();
        tokio::spawn(async move {
            let result = client.send(&text).await;
            // The receiver is only gone during shutdown; drop the reply then.
            let _ = tx.send(AppEvent::BotReply(result));
        });
    }

    /// Applies a transport completion. Runs on the UI task only; the spawned
    /// request task never touches the conversation.
    pub fn on_bot_reply(&mut self, result: TalkResult<String>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(text) => {
                self.conversation.append_bot_message(text);
            }
            Err(e) => {
                warn!("send failed: {}", e);
                self.notice = Some(e.to_string());
            }
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
        self.stick_to_bottom = false;
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = (self.scroll + lines).min(self.max_scroll);
        if self.scroll == self.max_scroll {
            self.stick_to_bottom = true;
        }
    }

    pub fn update_spinner(&mut self) {
        if self.in_flight > 0 {
            self.spinner_idx = self.spinner_idx.wrapping_add(1);
        }
    }
}
