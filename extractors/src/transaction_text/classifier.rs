use shared_types::TransactionType;

pub const FALLBACK_CATEGORY: &str = "outros";

/// Words that mark a sentence as income. Anything else is an expense.
pub const INCOME_WORDS: &[&str] = &[
    "recebi",
    "ganhei",
    "receita",
    "salário",
    "salario",
    "ganho",
    "entrada",
    "recebimento",
    "pagamento recebido",
    "dinheiro que recebi",
    "lucro",
    "rendimento",
    "venda",
    "vendeu",
    "vendi",
    "freelance",
    "freela",
    "bonificação",
    "bônus",
    "prêmio",
    "comissão",
    "dividendos",
];

pub struct CategoryRule {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
}

impl CategoryRule {
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }
}

/// Income categories, checked in priority order
pub const INCOME_CATEGORIES: &[CategoryRule] = &[
    CategoryRule {
        category: "salario",
        keywords: &["salário", "salario", "trabalho"],
    },
    CategoryRule {
        category: "freelance",
        keywords: &["freelance", "freela"],
    },
    CategoryRule {
        category: "vendas",
        keywords: &["venda", "vendeu", "vendi"],
    },
    CategoryRule {
        category: "investimentos",
        keywords: &["investimento", "dividendo", "renda"],
    },
    CategoryRule {
        category: "presentes",
        keywords: &["presente", "gift", "doação"],
    },
];

/// Expense categories, checked in table order. Vocabularies overlap, so
/// the order decides ties.
pub const EXPENSE_CATEGORIES: &[CategoryRule] = &[
    CategoryRule {
        category: "alimentacao",
        keywords: &[
            "mercado",
            "comida",
            "alimento",
            "supermercado",
            "açougue",
            "acougue",
            "padaria",
            "restaurante",
            "lanche",
            "pizza",
            "hambúrguer",
            "hamburguer",
            "delivery",
            "ifood",
        ],
    },
    CategoryRule {
        category: "transporte",
        keywords: &[
            "gasolina",
            "transporte",
            "uber",
            "taxi",
            "táxi",
            "ônibus",
            "onibus",
            "metro",
            "metrô",
            "combustível",
            "combustivel",
            "estacionamento",
            "viagem",
            "passagem",
            "pedágio",
            "pedagio",
        ],
    },
    CategoryRule {
        category: "saude",
        keywords: &[
            "remédio",
            "remedio",
            "médico",
            "medico",
            "saúde",
            "saude",
            "hospital",
            "farmácia",
            "farmacia",
            "consulta",
            "exame",
            "dentista",
            "plano de saúde",
            "plano de saude",
        ],
    },
    CategoryRule {
        category: "casa",
        keywords: &[
            "casa",
            "aluguel",
            "moradia",
            "apartamento",
            "condomínio",
            "condominio",
            "água",
            "agua",
            "luz",
            "energia",
            "internet",
            "gás",
            "botijão",
            "iptu",
            "reforma",
        ],
    },
    CategoryRule {
        category: "vestuario",
        keywords: &[
            "roupa", "sapato", "camisa", "calça", "calca", "vestido", "tênis", "tenis", "moda",
            "loja", "shopping",
        ],
    },
    CategoryRule {
        category: "lazer",
        keywords: &[
            "cinema",
            "show",
            "festa",
            "diversão",
            "entretenimento",
            "jogo",
            "streaming",
            "netflix",
            "spotify",
        ],
    },
    CategoryRule {
        category: "educacao",
        keywords: &[
            "curso",
            "educação",
            "educacao",
            "livro",
            "faculdade",
            "escola",
            "ensino",
            "aula",
            "material escolar",
        ],
    },
];

/// Income when any income word occurs in lower-cased `text`
pub fn classify_type(text: &str) -> TransactionType {
    if INCOME_WORDS.iter().any(|word| text.contains(word)) {
        TransactionType::Income
    } else {
        TransactionType::Expense
    }
}

pub fn classify_category(text: &str, transaction_type: TransactionType) -> &'static str {
    let rules = match transaction_type {
        TransactionType::Income => INCOME_CATEGORIES,
        TransactionType::Expense => EXPENSE_CATEGORIES,
    };

    rules
        .iter()
        .find(|rule| rule.matches(text))
        .map(|rule| rule.category)
        .unwrap_or(FALLBACK_CATEGORY)
}
