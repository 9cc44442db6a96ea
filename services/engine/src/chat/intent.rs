//! services/engine/src/chat/intent.rs
//!
//! Intent classification for user utterances.
//!
//! Case-insensitive substring matching against an ordered rule table; the
//! first matching rule wins. Lecture-scoped rules run only when the context
//! carries a lecture, and run before every general rule. No ML model: the
//! keyword table is a cheap, deterministic stand-in for one. What matters is
//! the ordered-rules-with-default structure, which keeps the classifier a
//! total, pure function of its inputs.

use lecture_assistant_core::domain::ConversationContext;

/// Programming language requested in a code-example utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeLanguage {
    Python,
}

/// Science subject detected in an explanation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScienceField {
    QuantumComputing,
    Photosynthesis,
}

/// Which canned answer template applies to an utterance.
///
/// This is the generator's entire input domain: every variant has a
/// template, so an unmapped category cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCategory {
    /// Key concepts of the lecture in context.
    LectureKeyConcepts,
    /// A summary of the lecture in context.
    LectureSummary,
    CodeExample(CodeLanguage),
    /// CSS layout/centering help.
    LayoutHelp,
    EquationSolve,
    ScienceTopic(ScienceField),
    FrameworkComparison,
    /// Fallback when a lecture is present but no specific rule matched.
    DefaultLectureAware,
    /// Fallback in general-knowledge mode.
    DefaultGeneral,
}

impl ResponseCategory {
    /// Returns a short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            ResponseCategory::LectureKeyConcepts => "lecture_key_concepts",
            ResponseCategory::LectureSummary => "lecture_summary",
            ResponseCategory::CodeExample(_) => "code_example",
            ResponseCategory::LayoutHelp => "layout_help",
            ResponseCategory::EquationSolve => "equation_solve",
            ResponseCategory::ScienceTopic(_) => "science_topic",
            ResponseCategory::FrameworkComparison => "framework_comparison",
            ResponseCategory::DefaultLectureAware => "default_lecture_aware",
            ResponseCategory::DefaultGeneral => "default_general",
        }
    }
}

/// Whether a rule applies always or only with a lecture in context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleScope {
    LectureOnly,
    Any,
}

/// One (predicate, category) entry of the ordered rule table.
struct IntentRule {
    scope: RuleScope,
    predicate: fn(&str) -> bool,
    category: ResponseCategory,
}

/// The ordered rule table. Order is significant: lecture-aware rules come
/// first, and earlier general rules shadow later ones.
static RULES: &[IntentRule] = &[
    IntentRule {
        scope: RuleScope::LectureOnly,
        predicate: asks_key_concepts,
        category: ResponseCategory::LectureKeyConcepts,
    },
    IntentRule {
        scope: RuleScope::LectureOnly,
        predicate: asks_summary,
        category: ResponseCategory::LectureSummary,
    },
    IntentRule {
        scope: RuleScope::Any,
        predicate: asks_python_code,
        category: ResponseCategory::CodeExample(CodeLanguage::Python),
    },
    IntentRule {
        scope: RuleScope::Any,
        predicate: asks_css_centering,
        category: ResponseCategory::LayoutHelp,
    },
    IntentRule {
        scope: RuleScope::Any,
        predicate: asks_equation,
        category: ResponseCategory::EquationSolve,
    },
    IntentRule {
        scope: RuleScope::Any,
        predicate: |u| u.contains("quantum"),
        category: ResponseCategory::ScienceTopic(ScienceField::QuantumComputing),
    },
    IntentRule {
        scope: RuleScope::Any,
        predicate: |u| u.contains("photosynthesis"),
        category: ResponseCategory::ScienceTopic(ScienceField::Photosynthesis),
    },
    IntentRule {
        scope: RuleScope::Any,
        predicate: asks_react_vs_vue,
        category: ResponseCategory::FrameworkComparison,
    },
];

fn asks_key_concepts(u: &str) -> bool {
    u.contains("main concept") || u.contains("key")
}

fn asks_summary(u: &str) -> bool {
    u.contains("summary")
}

fn asks_python_code(u: &str) -> bool {
    u.contains("python") && (u.contains("function") || u.contains("code"))
}

fn asks_css_centering(u: &str) -> bool {
    u.contains("css") && u.contains("center")
}

fn asks_equation(u: &str) -> bool {
    u.contains("solve") || u.contains("equation")
}

fn asks_react_vs_vue(u: &str) -> bool {
    u.contains("react") && u.contains("vue")
}

/// Selects exactly one response category for an utterance.
///
/// Total and pure: when no specific rule matches, the default depends only
/// on whether the context carries a lecture.
pub fn classify(utterance: &str, context: &ConversationContext) -> ResponseCategory {
    let lowered = utterance.to_lowercase();

    for rule in RULES {
        if rule.scope == RuleScope::LectureOnly && !context.has_lecture() {
            continue;
        }
        if (rule.predicate)(&lowered) {
            return rule.category;
        }
    }

    if context.has_lecture() {
        ResponseCategory::DefaultLectureAware
    } else {
        ResponseCategory::DefaultGeneral
    }
}
