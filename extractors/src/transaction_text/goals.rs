use shared_types::Goal;

/// Maps words in the sentence to fragments of likely goal names
pub struct GoalKeywordGroup {
    pub keywords: &'static [&'static str],
    pub goal_names: &'static [&'static str],
}

pub const GOAL_KEYWORD_GROUPS: &[GoalKeywordGroup] = &[
    GoalKeywordGroup {
        keywords: &["viagem", "viajar", "turismo", "férias"],
        goal_names: &["viagem"],
    },
    GoalKeywordGroup {
        keywords: &["casa", "apartamento", "imóvel", "moradia"],
        goal_names: &["casa"],
    },
    GoalKeywordGroup {
        keywords: &["carro", "veículo", "automóvel"],
        goal_names: &["carro"],
    },
    GoalKeywordGroup {
        keywords: &["emergência", "reserva", "emergencia"],
        goal_names: &["emergência", "reserva"],
    },
    GoalKeywordGroup {
        keywords: &["curso", "educação", "estudo", "faculdade"],
        goal_names: &["educação", "curso"],
    },
];

/// Goal referenced by lower-cased `text`.
///
/// A goal whose name appears verbatim wins first, in list order. Otherwise
/// the keyword groups are consulted.
pub fn match_goal<'a>(text: &str, goals: &'a [Goal]) -> Option<&'a Goal> {
    if goals.is_empty() {
        return None;
    }

    let by_name = goals.iter().find(|goal| {
        let name = goal.nome.trim().to_lowercase();
        !name.is_empty() && text.contains(&name)
    });
    if by_name.is_some() {
        return by_name;
    }

    GOAL_KEYWORD_GROUPS
        .iter()
        .filter(|group| group.keywords.iter().any(|keyword| text.contains(keyword)))
        .flat_map(|group| group.goal_names.iter())
        .find_map(|fragment| {
            goals
                .iter()
                .find(|goal| goal.nome.to_lowercase().contains(fragment))
        })
}
