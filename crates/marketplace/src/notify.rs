use dialoguer::Input;

/// Delivers blocking alerts to the user.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Prints alerts as shell warnings, optionally waiting for the user to acknowledge them.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShellNotifier {
    acknowledge: bool,
}

impl ShellNotifier {
    pub fn new(acknowledge: bool) -> Self {
        Self { acknowledge }
    }
}

impl Notifier for ShellNotifier {
    fn alert(&self, message: &str) {
        let _ = sh_warn!("{message}");
        if self.acknowledge {
            let _ = Input::<String>::new()
                .with_prompt("Press enter to continue")
                .allow_empty(true)
                .report(false)
                .interact_text();
        }
    }
}
