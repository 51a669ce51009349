use tracing::{Event, Subscriber};
use tracing_subscriber::{
    fmt::{
        self,
        format::{Format, FormatEvent, FormatFields, Writer},
        FmtContext,
    },
    registry::LookupSpan,
};

/// Event formatter that indents each line by the depth of its span scope.
pub struct PrettyFormatter {
    inner: Format,
    separator: bool,
}

impl PrettyFormatter {
    pub fn new(ansi: bool) -> Self {
        Self {
            inner: fmt::format()
                .with_ansi(ansi)
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .with_level(true)
                .with_source_location(false),
            separator: false,
        }
    }

    /// Prints a `-----` rule before every event, for the log file.
    pub fn with_separator(mut self) -> Self {
        self.separator = true;
        self
    }
}

impl<S, N> FormatEvent<S, N> for PrettyFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let depth = ctx.event_scope().map(|scope| scope.count()).unwrap_or(0);

        if self.separator {
            writeln!(writer, "-----")?;
        }
        for _ in 0..depth / 4 {
            write!(writer, "  ")?;
        }

        if depth > 0 {
            write!(writer, "└─")?;
        } else {
            write!(writer, "  ")?;
        }

        self.inner.format_event(ctx, writer, event)
    }
}
