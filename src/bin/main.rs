use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Timer};
use log::info;
use speedread_core::{
    app::{AdvanceHandle, PlaybackController, ReaderConfig, TickResult},
    input::QueuedInput,
};

use script::KeyScript;
use terminal::TerminalRenderer;

#[path = "main/script.rs"]
mod script;
#[path = "main/terminal.rs"]
mod terminal;

const TITLE: &str = "SpeedRead Pro";
const WELCOME_TEXT: &str = "Welcome to SpeedRead Pro! \n\nPaste your own text here to get started. \n\n\
Speed reading technologies like this one allow you to read faster by eliminating the need for \
your eyes to move across the page (saccadic movements). \n\nInstead, the words are flashed in the \
same position, centering on the 'Optimal Recognition Point'\u{2014}usually the middle \
character\u{2014}highlighted in red. \n\nTry adjusting the Words Per Minute (WPM) slider below. \
Most people can comfortably read at 400-600 WPM with a little practice. \n\nReady? Press Play!";
const ORP_ANCHOR_PERCENT: usize = 42;
const WORD_COLUMNS: usize = 40;
const INPUT_QUEUE_DEPTH: usize = 8;
const IDLE_POLL_INTERVAL_MS: u64 = 250;
const REPORT_INTERVAL_MS: u64 = 5_000;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
    info!("boot: {} starting", TITLE);

    let mut app = PlaybackController::with_text(ReaderConfig::default(), WELCOME_TEXT);
    let mut input = QueuedInput::<INPUT_QUEUE_DEPTH>::new();
    let mut script = KeyScript::demo();
    let mut renderer = TerminalRenderer::new(WORD_COLUMNS, ORP_ANCHOR_PERCENT);
    info!(
        "reader: loaded words={} wpm={} script_steps={}",
        app.total_words(),
        app.wpm(),
        script.remaining()
    );

    let loop_start = Instant::now();
    let mut report_start_ms = 0u64;
    let mut report_words = 0u64;

    loop {
        let now_ms = loop_start.elapsed().as_millis();

        script.release_due(now_ms, &mut input);
        let Ok(_) = app.process_inputs(&mut input, now_ms);

        if app.tick(now_ms) == TickResult::RenderRequested {
            app.with_display(|display| renderer.render(&display));
        }

        report_words = report_words.saturating_add(app.drain_word_updates() as u64);
        let elapsed_ms = now_ms.saturating_sub(report_start_ms);
        if elapsed_ms >= REPORT_INTERVAL_MS {
            let wpm_x100 = report_words * 6_000_000 / elapsed_ms.max(1);
            info!(
                "effective_wpm={}.{:02} words={} elapsed_ms={}",
                wpm_x100 / 100,
                wpm_x100 % 100,
                report_words,
                elapsed_ms
            );
            report_words = 0;
            report_start_ms = now_ms;
        }

        if script.is_finished() && input.is_empty() && !app.is_playing() {
            info!(
                "reader: done at word {}/{} phase={:?}",
                app.current_index() + 1,
                app.total_words(),
                app.phase()
            );
            break;
        }

        // Wake for the earliest deadline, capped by the idle poll.
        let wake_ms = [
            app.next_advance().map(AdvanceHandle::due_ms),
            script.next_due_ms(),
        ]
        .into_iter()
        .flatten()
        .fold(now_ms + IDLE_POLL_INTERVAL_MS, u64::min);
        Timer::at(loop_start + Duration::from_millis(wake_ms)).await;
    }

    renderer.finish();
    std::process::exit(0);
}
