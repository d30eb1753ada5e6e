use std::io::Write;

const FRAMES: [char; 4] = ['-', '\\', '|', '/'];

/// A rotating indicator on a single terminal line, redrawn with a carriage return.
///
/// Progress output is cosmetic: failures to write it are ignored.
pub(crate) struct Spinner {
    out: Box<dyn Write>,
    frame: usize,
}

impl std::fmt::Debug for Spinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spinner").field("frame", &self.frame).finish()
    }
}

impl Spinner {
    pub(crate) fn new(out: Box<dyn Write>) -> Self {
        Spinner { out, frame: 0 }
    }

    pub(crate) fn tick(&mut self) {
        let _ = write!(
            self.out,
            "\rPlease wait, attempting to schedule... {}",
            FRAMES[self.frame % FRAMES.len()]
        );
        let _ = self.out.flush();
        self.frame += 1;
    }

    /// Replace the indicator line with `message`.
    pub(crate) fn finish(&mut self, message: &str) {
        let _ = writeln!(self.out, "\r{message:<48}");
        let _ = self.out.flush();
        self.frame = 0;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::Write;
    use std::rc::Rc;

    use super::Spinner;

    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn frames_rotate() {
        let output = Shared::default();
        let mut spinner = Spinner::new(Box::new(output.clone()));

        for _ in 0..5 {
            spinner.tick();
        }
        spinner.finish("done");

        let text = String::from_utf8(output.0.borrow().clone()).unwrap();
        let frames: String = text
            .split('\r')
            .filter_map(|line| line.strip_prefix("Please wait, attempting to schedule... "))
            .collect();

        assert_eq!(frames, "-\\|/-");
        assert!(text.ends_with(&format!("\r{:<48}\n", "done")));
    }
}
