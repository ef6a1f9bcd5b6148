//! Raw mode and alternate screen setup for the viewer
//!
//! [`enter`] switches the terminal over and hands back a guard that puts it
//! back when dropped, including when setup fails halfway.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;

/// Runs its restore action once, on drop
pub struct RestoreGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    pub fn new(restore: F) -> Self {
        RestoreGuard {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

/// Enable raw mode and enter the alternate screen
pub fn enter() -> io::Result<RestoreGuard<fn()>> {
    enable_raw_mode()?;
    let guard = RestoreGuard::new(restore as fn());
    execute!(io::stdout(), EnterAlternateScreen)?;
    Ok(guard)
}

// Errors are ignored: this also runs while unwinding from a failed setup
fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn setup(fail_at: Option<&str>, restored: &Cell<u32>) -> io::Result<()> {
        let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
        if let Some(step) = fail_at {
            return Err(io::Error::other(format!("{} failed", step)));
        }
        Ok(())
    }

    #[test]
    fn test_restores_when_setup_fails() {
        let restored = Cell::new(0);
        assert!(setup(Some("alternate screen"), &restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_restores_once_on_normal_exit() {
        let restored = Cell::new(0);
        setup(None, &restored).unwrap();
        assert_eq!(restored.get(), 1);
    }
}
