use shared::{DueStatus, Reminder};

/// Placeholder rendered for optional fields that were never recorded
const MISSING_FIELD: &str = "-";

/// Render the fixed WhatsApp notification for a reminder.
///
/// The template is not configurable. Every record field is embedded
/// verbatim; absent optionals render as [`MISSING_FIELD`].
pub fn build_reminder_message(reminder: &Reminder, status: DueStatus) -> String {
    let test_number = reminder.test_number.as_deref().unwrap_or(MISSING_FIELD);
    let vehicle_class = reminder.vehicle_class.as_deref().unwrap_or(MISSING_FIELD);

    format!(
        "🚗 Hello {name},\n\n\
         📅 The periodic inspection for your vehicle {vehicle_number} is {label}.\n\
         🔢 Inspection number: {test_number}\n\
         🚛 Vehicle class: {vehicle_class}\n\
         📆 Inspection date: {test_date}\n\n\
         ⚠️ Please bring your vehicle to the inspection station on the scheduled date.\n\
         ✅ Make sure the vehicle is roadworthy before the test.\n\n\
         🙏 Thank you - Vehicle Inspection Office\n",
        name = reminder.name,
        vehicle_number = reminder.vehicle_number,
        label = status.label(),
        test_number = test_number,
        vehicle_class = vehicle_class,
        test_date = reminder.test_date,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder() -> Reminder {
        Reminder {
            id: 1,
            name: "Budi Santoso".to_string(),
            vehicle_number: "AD 1234 XY".to_string(),
            test_number: Some("SKR-0042".to_string()),
            vehicle_class: Some("Pickup".to_string()),
            test_date: "2024-06-15".to_string(),
            phone: None,
            created_at: "2024-06-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn message_embeds_every_record_field() {
        let message = build_reminder_message(&reminder(), DueStatus::DueToday);

        assert!(message.contains("Budi Santoso"));
        assert!(message.contains("AD 1234 XY"));
        assert!(message.contains("SKR-0042"));
        assert!(message.contains("Pickup"));
        assert!(message.contains("2024-06-15"));
        assert!(message.contains("due today"));
    }

    #[test]
    fn absent_optional_fields_render_as_placeholder() {
        let mut record = reminder();
        record.test_number = None;
        record.vehicle_class = None;

        let message = build_reminder_message(&record, DueStatus::Upcoming);
        assert!(message.contains("Inspection number: -"));
        assert!(message.contains("Vehicle class: -"));
    }

    #[test]
    fn template_ends_with_call_to_action() {
        let message = build_reminder_message(&reminder(), DueStatus::DueTomorrow);
        assert!(message.contains("bring your vehicle to the inspection station"));
        assert!(message.trim_end().ends_with("Thank you - Vehicle Inspection Office"));
    }
}
