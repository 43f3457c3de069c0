//! Command dispatch scenarios, run line by line as the assistant would.

use chrono::NaiveDate;
use contact_assistant::{AddressBook, CommandDispatcher, CommandOutcome};

struct Assistant {
    book: AddressBook,
    dispatcher: CommandDispatcher,
    today: NaiveDate,
}

impl Assistant {
    fn new() -> Self {
        Self {
            book: AddressBook::new(),
            dispatcher: CommandDispatcher::default(),
            today: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    fn run(&mut self, line: &str) -> String {
        self.dispatcher
            .handle_line(line, &mut self.book, self.today)
            .message()
            .to_string()
    }
}

#[test]
fn test_john_phone_scenario() {
    let mut assistant = Assistant::new();

    assert_eq!(
        assistant.run("add John 1234567890 0987654321"),
        "New contact 'John' added with phone(s)."
    );
    assert_eq!(
        assistant.run("phone John"),
        "Phone(s) for John: 1234567890, 0987654321"
    );

    assert_eq!(
        assistant.run("change John 1111111111"),
        "Phone number changed for contact 'John'."
    );
    assert_eq!(
        assistant.run("phone John"),
        "Phone(s) for John: 1111111111, 0987654321"
    );
}

#[test]
fn test_change_rejects_invalid_phone() {
    let mut assistant = Assistant::new();
    assistant.run("add John 1234567890");

    assert_eq!(
        assistant.run("change John 12345"),
        "Invalid phone number. It must contain exactly 10 digits."
    );
    assert_eq!(assistant.run("phone John"), "Phone(s) for John: 1234567890");
}

#[test]
fn test_phone_for_contact_without_numbers() {
    let mut assistant = Assistant::new();
    assistant.book.add_record(contact_assistant::Record::new("Empty").unwrap());

    assert_eq!(
        assistant.run("phone Empty"),
        "No phone numbers found for Empty."
    );
}

#[test]
fn test_birthday_commands() {
    let mut assistant = Assistant::new();
    assistant.run("add Alice 1234567890");
    assistant.run("add Bob 0987654321");

    assert_eq!(
        assistant.run("add-birthday Alice 05.06.2000"),
        "Birthday added for Alice."
    );
    assert_eq!(
        assistant.run("add-birthday Bob 01.01.2000"),
        "Birthday added for Bob."
    );
    assert_eq!(
        assistant.run("add-birthday Alice 2000-06-05"),
        "Invalid date format. Use DD.MM.YYYY"
    );

    assert_eq!(
        assistant.run("show-birthday Alice"),
        "Birthday for Alice: 05.06.2000"
    );
    assert_eq!(
        assistant.run("birthdays"),
        "Upcoming birthdays:\nAlice: 05.06.2000"
    );
}

#[test]
fn test_birthday_commands_for_missing_data() {
    let mut assistant = Assistant::new();
    assistant.run("add Alice 1234567890");

    assert_eq!(
        assistant.run("show-birthday Alice"),
        "Birthday for contact 'Alice' not found."
    );
    assert_eq!(
        assistant.run("show-birthday Ghost"),
        "Birthday for contact 'Ghost' not found."
    );
    assert_eq!(
        assistant.run("add-birthday Ghost 01.01.2000"),
        "Contact 'Ghost' not found."
    );
    assert_eq!(assistant.run("birthdays"), "No upcoming birthdays.");
}

#[test]
fn test_all_lists_records_in_insertion_order() {
    let mut assistant = Assistant::new();
    assert_eq!(assistant.run("all"), "No contacts found.");

    assistant.run("add Zed 1234567890");
    assistant.run("add Amy 0987654321 1111111111");
    assistant.run("add-birthday Amy 05.06.2000");

    assert_eq!(
        assistant.run("all"),
        "All contacts:\n\
         Contact name: Zed, phones: 1234567890\n\
         Contact name: Amy, phones: 0987654321; 1111111111, Birthday: 05.06.2000"
    );
}

#[test]
fn test_usage_errors_do_not_touch_book() {
    let mut assistant = Assistant::new();

    assert_eq!(
        assistant.run("add John"),
        "Invalid number of arguments for 'add' command. Usage: add [name] [phone] [phone...]"
    );
    assert!(assistant.book.is_empty());
}

#[test]
fn test_custom_window() {
    let mut assistant = Assistant::new();
    assistant.dispatcher = CommandDispatcher::new(2);
    assistant.run("add Alice 1234567890");
    assistant.run("add-birthday Alice 05.06.2000");

    assert_eq!(assistant.run("birthdays"), "No upcoming birthdays.");
}

#[test]
fn test_exit_and_close() {
    let mut assistant = Assistant::new();
    for line in ["exit", "close"] {
        let outcome = assistant
            .dispatcher
            .handle_line(line, &mut assistant.book, assistant.today);
        assert_eq!(outcome, CommandOutcome::Exit("Good bye!".to_string()));
    }
}
