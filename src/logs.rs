use std::fmt::{self, Write as _};
use std::io::{stderr, Write};
use termion::color::{self, Fg};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Prints events to stderr, one line each, with a colored level label.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLayer {
    level: Level,
}

impl ConsoleLayer {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Installs the layer as the global subscriber. Later calls are ignored.
    pub fn install(self) {
        let subscriber = tracing_subscriber::registry().with(self);
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn label(level: &Level) -> (&'static str, String) {
        match *level {
            Level::ERROR => ("ERROR", Fg(color::LightRed).to_string()),
            Level::WARN => ("WARN", Fg(color::LightYellow).to_string()),
            Level::INFO => ("INFO", Fg(color::LightBlue).to_string()),
            Level::DEBUG => ("DEBUG", Fg(color::LightBlack).to_string()),
            Level::TRACE => ("TRACE", Fg(color::LightBlack).to_string()),
        }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        metadata.level() <= &self.level
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut line = Line::default();
        event.record(&mut line);

        let (label, color) = Self::label(event.metadata().level());
        let id_color = Fg(color::LightBlack);
        let reset = termion::style::Reset;
        let msg = line.message.replace('\t', "    ");
        let _ = writeln!(
            stderr(),
            "{color}[{label}] {reset}{msg}{id_color}{}{reset}",
            line.fields
        );
    }
}

/// Message and remaining fields of one event.
#[derive(Default)]
struct Line {
    message: String,
    fields: String,
}

impl Visit for Line {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }
}
