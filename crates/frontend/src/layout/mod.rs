mod header;
mod sidebar;

pub use header::Header;
pub use sidebar::Sidebar;

use contracts::system::auth::Role;

/// Разделы приложения. Роутера нет: выбранный раздел живёт
/// в сигнале и переключает содержимое центральной области.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Users,
    Appointments,
    MedicalRecords,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::Users,
        Section::Appointments,
        Section::MedicalRecords,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Users => "Пользователи",
            Section::Appointments => "Приёмы",
            Section::MedicalRecords => "Медкарта",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Users => "users",
            Section::Appointments => "calendar",
            Section::MedicalRecords => "clipboard",
        }
    }

    pub fn allows(self, role: Role) -> bool {
        match self {
            Section::Users => role == Role::Admin,
            Section::Appointments => matches!(role, Role::Admin | Role::Doctor),
            Section::MedicalRecords => matches!(role, Role::Doctor | Role::Patient),
        }
    }

    /// Стартовый раздел после входа
    pub fn default_for(role: Role) -> Section {
        match role {
            Role::Admin => Section::Users,
            Role::Doctor => Section::Appointments,
            Role::Patient => Section::MedicalRecords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_by_role() {
        assert!(Section::Users.allows(Role::Admin));
        assert!(!Section::Users.allows(Role::Doctor));
        assert!(Section::Appointments.allows(Role::Doctor));
        assert!(!Section::Appointments.allows(Role::Patient));
        assert!(Section::MedicalRecords.allows(Role::Patient));
        assert!(!Section::MedicalRecords.allows(Role::Admin));
    }

    #[test]
    fn test_default_section_is_allowed() {
        for role in [Role::Admin, Role::Doctor, Role::Patient] {
            assert!(Section::default_for(role).allows(role));
        }
    }
}
