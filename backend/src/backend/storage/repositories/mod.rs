pub mod message_log_repository;
pub mod reminder_repository;

pub use message_log_repository::MessageLogRepository;
pub use reminder_repository::ReminderRepository;
