//! Line-oriented output sinks for run reports

use std::fmt;

/// Destination for report lines
///
/// Each call writes exactly one logical line; lines are kept in call order.
pub trait LogSink {
    fn log(&mut self, line: &str);

    /// Write a line built from format arguments
    fn log_fmt(&mut self, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(line) => self.log(line),
            None => self.log(&args.to_string()),
        }
    }
}

/// Writes report lines to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn log(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Captures lines in memory, mostly for tests
impl LogSink for Vec<String> {
    fn log(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn log(&mut self, line: &str) {
        (**self).log(line);
    }

    fn log_fmt(&mut self, args: fmt::Arguments<'_>) {
        (**self).log_fmt(args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_keeps_order() {
        let mut lines: Vec<String> = Vec::new();
        lines.log("first");
        lines.log_fmt(format_args!("{}: {} ms", "Part1", 1.5));
        lines.log("");

        assert_eq!(lines, vec!["first", "Part1: 1.5 ms", ""]);
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        let mut lines: Vec<String> = Vec::new();
        {
            let sink: &mut dyn LogSink = &mut lines;
            sink.log("via ref");
        }
        assert_eq!(lines, vec!["via ref"]);
    }
}
