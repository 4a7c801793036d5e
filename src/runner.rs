//! The demonstration sequence.
//!
//! Each selected lesson builds its type, exercises it once, and writes the
//! result to the supplied sink. Lessons run in canonical order regardless of
//! how they were selected.

use crate::config::DemoConfig;
use crate::error::{DemoError, DemoResult};
use crate::lessons::{Calculator, Car, ConstantsDemo, Counter, Example, Lesson, Person, Student};
use crate::logging::lesson_span;
use std::io::{self, Write};

/// What a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoReport {
    pub lessons_run: Vec<Lesson>,
    pub lines_written: usize,
}

/// Counts newline bytes passing through to the inner writer.
struct LineCounter<'a, W: Write> {
    inner: &'a mut W,
    lines: usize,
}

impl<W: Write> Write for LineCounter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.lines += buf[..written].iter().filter(|b| **b == b'\n').count();
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

pub fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> DemoResult<DemoReport> {
    config.validate()?;

    let mut sink = LineCounter {
        inner: out,
        lines: 0,
    };
    let mut report = DemoReport::default();

    for &lesson in &config.lessons {
        let span = lesson_span(lesson);
        let _guard = span.enter();
        let before = sink.lines;

        run_lesson(lesson, config, &mut sink)
            .map_err(|source| DemoError::output(lesson.into(), source))?;

        tracing::debug!(lines = sink.lines - before, "lesson finished");
        report.lessons_run.push(lesson);
    }

    sink.flush().map_err(|source| DemoError::output("flush", source))?;
    report.lines_written = sink.lines;

    tracing::info!(
        lessons = report.lessons_run.len(),
        lines = report.lines_written,
        "demo complete"
    );
    Ok(report)
}

fn run_lesson<W: Write>(lesson: Lesson, config: &DemoConfig, out: &mut W) -> io::Result<()> {
    let inputs = &config.inputs;
    match lesson {
        Lesson::Person => Person::new(inputs.person_name.as_str()).introduce(out),
        Lesson::Car => {
            let mut car = Car::new();
            car.set_model(inputs.car_model.as_str());
            writeln!(out, "{}", car.model())
        }
        Lesson::Calculator => {
            let (a, b) = inputs.addends;
            writeln!(out, "{}", Calculator::new().add(a, b))
        }
        Lesson::Student => Student::new(inputs.student_name.as_str()).display(out),
        Lesson::Example => Example::new(inputs.secret_number).show_number(out),
        Lesson::Counter => {
            let counters: Vec<Counter> = (0..inputs.counter_instances)
                .map(|_| Counter::new())
                .collect();
            tracing::debug!(constructed = counters.len(), "counters built");
            writeln!(out, "{}", Counter::count())
        }
        Lesson::Constants => ConstantsDemo::new().show_values(out, &config.timestamp_format),
    }
}
