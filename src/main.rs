use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use talknative::{
    app::App,
    config::Config,
    events::{AppEvent, EventHandler},
    key_handlers::handle_key,
    logging, transport, ui,
};

#[tokio::main]
async fn main() -> Result<()> {
    // A broken config is not fatal: start anyway and surface the problem in
    // the UI, where a bot reply would normally appear.
    let (config, config_notice) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e.to_string())),
    };

    let _logger = logging::init(&config.log_level)?;
    info!("talknative starting, endpoint {}", config.message_url());
    if let Some(notice) = &config_notice {
        error!("{}", notice);
    }

    install_panic_hook();
    let mut terminal = init_terminal()?;

    let mut events = EventHandler::new(Duration::from_millis(120));
    let mut app = App::new(transport::ChatClient::new(&config), events.sender());
    app.notice = config_notice;

    let result = run(&mut terminal, &mut app, &mut events).await;

    restore_terminal()?;
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<()> {
    terminal.draw(|f| ui::draw(f, app))?;

    while let Some(event) = events.next().await {
        match event {
            AppEvent::Key(key) => handle_key(key, app),
            AppEvent::Resize(_, _) => {}
            AppEvent::Tick => app.update_spinner(),
            AppEvent::BotReply(result) => app.on_bot_reply(result),
        }

        if app.should_quit {
            break;
        }
        terminal.draw(|f| ui::draw(f, app))?;
    }

    info!("talknative shutting down");
    Ok(())
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Ok(Terminal::new(backend)?)
}

fn restore_terminal() -> Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
