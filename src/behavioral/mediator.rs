//! Mediator: users talk through a chat room and never hold references to each other.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct ChatRoom {
    transcript: RefCell<Vec<String>>,
}

impl ChatRoom {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn display_message(&self, user: &str, message: &str) {
        self.transcript
            .borrow_mut()
            .push(format!("User {user}: {message}"));
    }

    pub fn transcript(&self) -> Vec<String> {
        self.transcript.borrow().clone()
    }
}

#[derive(Debug, Clone)]
pub struct User {
    username: String,
    room: Rc<ChatRoom>,
}

impl User {
    pub fn new(username: impl Into<String>, room: &Rc<ChatRoom>) -> Self {
        Self {
            username: username.into(),
            room: Rc::clone(room),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn send_message(&self, message: &str) {
        self.room.display_message(&self.username, message);
    }
}

pub fn demo() -> Vec<String> {
    let room = ChatRoom::new();
    let anya = User::new("Anya", &room);
    let alex = User::new("Alex", &room);

    anya.send_message("Hello!");
    alex.send_message("Hi!!!");
    room.transcript()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_go_through_room_in_order() {
        let room = ChatRoom::new();
        let a = User::new("a", &room);
        let b = User::new("b", &room);
        b.send_message("first");
        a.send_message("second");
        assert_eq!(room.transcript(), vec!["User b: first", "User a: second"]);
    }

    #[test]
    fn test_separate_rooms_do_not_share() {
        let one = ChatRoom::new();
        let two = ChatRoom::new();
        User::new("x", &one).send_message("hi");
        assert!(two.transcript().is_empty());
        assert_eq!(one.transcript().len(), 1);
    }

    #[test]
    fn test_demo() {
        assert_eq!(demo(), vec!["User Anya: Hello!", "User Alex: Hi!!!"]);
    }
}
