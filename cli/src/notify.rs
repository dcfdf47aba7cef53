/// Outbound channel for confirmation messages. Console output is the one
/// mandatory channel; other channels (speech, desktop notifications) are
/// external collaborators that can implement this trait.
pub trait Notifier {
    fn confirm(&self, message: &str);
}

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn confirm(&self, message: &str) {
        println!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn confirm(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn notifier_is_object_safe() {
        let recorder = RecordingNotifier {
            messages: RefCell::new(Vec::new()),
        };
        let notifier: &dyn Notifier = &recorder;

        notifier.confirm("Task 1 added successfully.");

        assert_eq!(
            *recorder.messages.borrow(),
            vec!["Task 1 added successfully.".to_string()]
        );
    }
}
