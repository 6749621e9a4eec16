use std::fmt;
use std::str::FromStr;

/// A department from the fixed faculty roster.
///
/// The set is closed: records on disk are keyed by `key()`, menu buttons
/// and callback payloads carry the same key, and anything that does not
/// parse back into a variant is rejected at the router boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    IndustrialInformatics,
    Biocybernetics,
    SystemsEngineering,
    AiTechnologies,
    HigherMathematics,
    ManagementProblems,
    AutomaticSystems,
    ComputerSecurity,
}

impl Department {
    /// Every department, in menu order.
    pub const ALL: [Department; 8] = [
        Department::IndustrialInformatics,
        Department::Biocybernetics,
        Department::SystemsEngineering,
        Department::AiTechnologies,
        Department::HigherMathematics,
        Department::ManagementProblems,
        Department::AutomaticSystems,
        Department::ComputerSecurity,
    ];

    /// Stable key used in file names and callback payloads.
    pub fn key(&self) -> &'static str {
        match self {
            Department::IndustrialInformatics => "industrial_informatics",
            Department::Biocybernetics => "biocybernetics",
            Department::SystemsEngineering => "systems_engineering",
            Department::AiTechnologies => "ai_technologies",
            Department::HigherMathematics => "higher_mathematics",
            Department::ManagementProblems => "management_problems",
            Department::AutomaticSystems => "automatic_systems",
            Department::ComputerSecurity => "computer_security",
        }
    }

    /// Display title shown on buttons and in prompts.
    pub fn title(&self) -> &'static str {
        match self {
            Department::IndustrialInformatics => "🏭 Промышленная информатика",
            Department::Biocybernetics => "🧬 Биокибернетика",
            Department::SystemsEngineering => "⚙️ Системная инженерия",
            Department::AiTechnologies => "🤖 ИИ технологии",
            Department::HigherMathematics => "🧮 Высшая математика",
            Department::ManagementProblems => "📊 Проблемы управления",
            Department::AutomaticSystems => "🦾 Автоматические системы",
            Department::ComputerSecurity => "🔒 Компьютерная безопасность",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "industrial_informatics" => Ok(Department::IndustrialInformatics),
            "biocybernetics" => Ok(Department::Biocybernetics),
            "systems_engineering" => Ok(Department::SystemsEngineering),
            "ai_technologies" => Ok(Department::AiTechnologies),
            "higher_mathematics" => Ok(Department::HigherMathematics),
            "management_problems" => Ok(Department::ManagementProblems),
            "automatic_systems" => Ok(Department::AutomaticSystems),
            "computer_security" => Ok(Department::ComputerSecurity),
            _ => Err(format!("Unknown department: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for dept in Department::ALL {
            assert_eq!(dept.key().parse::<Department>(), Ok(dept));
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!("quantum_alchemy".parse::<Department>().is_err());
        assert!("".parse::<Department>().is_err());
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = Department::ALL.iter().map(|d| d.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Department::ALL.len());
    }
}
