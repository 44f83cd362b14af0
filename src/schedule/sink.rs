use std::io::Write;

use crate::schedule::AssignedCourse;

/// Receives a schedule once it has been accepted.
pub trait ScheduleSink {
    fn accept(&mut self, schedule: &[AssignedCourse]) -> anyhow::Result<()>;
}

/// Writes one line per course, like `CS115, 10:00 for 2 hours, Days: Monday, Wednesday`.
pub struct TextSink<W> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ScheduleSink for TextSink<W> {
    fn accept(&mut self, schedule: &[AssignedCourse]) -> anyhow::Result<()> {
        writeln!(self.writer, "Your class schedule:")?;
        for course in schedule {
            writeln!(self.writer, "{}", course)?;
        }

        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the schedule as a pretty printed json array.
pub struct JsonSink<W> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ScheduleSink for JsonSink<W> {
    fn accept(&mut self, schedule: &[AssignedCourse]) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, schedule)?;
        writeln!(self.writer)?;

        self.writer.flush()?;
        Ok(())
    }
}

impl ScheduleSink for Vec<AssignedCourse> {
    fn accept(&mut self, schedule: &[AssignedCourse]) -> anyhow::Result<()> {
        self.extend_from_slice(schedule);
        Ok(())
    }
}
