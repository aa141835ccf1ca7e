use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::rc::Rc;

pub use regex::Error as RegexError;

/// An immutable lexing rule: a leaf pattern, or a combinator over sub-rules.
///
/// Rules are cheap to clone and share structure: the same sub-rule may sit
/// under several parents. That sharing is safe because a rule is never
/// mutated after construction; matching it is a pure function of the stream.
#[derive(Debug, Clone)]
pub struct Rule(pub(crate) Rc<RuleKind>);

/// The closed set of rule variants. Matching dispatches exhaustively over
/// these, so every kind is guaranteed to be handled.
#[derive(Debug)]
pub(crate) enum RuleKind {
    /// Matches exactly this text.
    Literal(String),
    /// Matches a regular expression anchored at the start of the stream.
    Pattern { pattern: String, regex: Regex },
    /// All children in order, consuming cumulatively.
    Sequence(Vec<Rule>),
    /// The first child (in order) that matches; earlier alternatives shadow
    /// later ones.
    Alternation(Vec<Rule>),
    /// The child zero or more times, greedily.
    Repetition(Rule),
    /// The child zero or one times; never fails.
    Optional(Rule),
    /// The child's match, with its tokens concatenated into a single token.
    Atom(Rule),
    /// Opportunistically consumes `discard` before matching `rule`, when
    /// whitespace skipping is enabled.
    Ignore { rule: Rule, discard: Rule },
}

// Patterns match anchored at the start of the stream, never later.
fn anchored(pattern: &str) -> Result<Regex, RegexError> {
    Regex::new(&format!("^({})", pattern))
}

pub(crate) static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s+)").unwrap());

impl Rule {
    fn new(kind: RuleKind) -> Rule {
        Rule(Rc::new(kind))
    }

    /// A rule matching exactly `text`.
    pub fn literal(text: &str) -> Rule {
        Rule::new(RuleKind::Literal(text.to_owned()))
    }

    /// A rule matching `pattern` at the start of the stream.
    ///
    /// The syntax is that of the `regex` crate. You do not need to begin the
    /// pattern with a start-of-string marker `^`.
    pub fn pattern(pattern: &str) -> Result<Rule, RegexError> {
        Ok(Rule::new(RuleKind::Pattern {
            pattern: pattern.to_owned(),
            regex: anchored(pattern)?,
        }))
    }

    /// The built-in whitespace rule: one or more whitespace characters. Used
    /// internally by the whitespace-skip policy, exposed for reuse.
    pub fn whitespace() -> Rule {
        Rule::new(RuleKind::Pattern {
            pattern: r"\s+".to_owned(),
            regex: WHITESPACE.clone(),
        })
    }

    /// This rule, zero or more times, greedily. Never fails.
    pub fn repeat(&self) -> Rule {
        Rule::new(RuleKind::Repetition(self.clone()))
    }

    /// This rule, zero or one times. Never fails.
    pub fn optional(&self) -> Rule {
        Rule::new(RuleKind::Optional(self.clone()))
    }

    /// This rule, with the tokens of each match concatenated into a single
    /// token, discarding internal structure.
    pub fn atomize(&self) -> Rule {
        Rule::new(RuleKind::Atom(self.clone()))
    }

    /// This rule wrapped in a singleton Sequence, forcing one extra level of
    /// match-tree nesting. Useful when this rule later becomes part of a
    /// larger Sequence and its tokens should stay grouped under flattening.
    pub fn capture(&self) -> Rule {
        Rule::new(RuleKind::Sequence(vec![self.clone()]))
    }

    /// This rule, preceded by an opportunistic attempt to consume `discard`
    /// (typically whitespace or comments). The discard attempt only happens
    /// when matching with whitespace skipping enabled, and its failure is
    /// ignored.
    pub fn ignore(&self, discard: impl Into<Rule>) -> Rule {
        Rule::new(RuleKind::Ignore {
            rule: self.clone(),
            discard: discard.into(),
        })
    }

    /// This rule, one or more times.
    ///
    /// A leaf pattern has its quantifier rewritten in place (`x?` becomes
    /// `x*`, anything else gets `+` appended), so it still yields one token
    /// per match. An optional rule relaxes to a plain repetition, the same
    /// rewrite at the rule level. Any other rule becomes one mandatory
    /// occurrence followed by a repetition.
    pub fn multiple(&self) -> Result<Rule, RegexError> {
        match &*self.0 {
            RuleKind::Pattern { pattern, .. } => {
                let pattern = match pattern.strip_suffix('?') {
                    Some(stem) => format!("{}*", stem),
                    None => format!("{}+", pattern),
                };
                Rule::pattern(&pattern)
            }
            RuleKind::Optional(rule) => Ok(Rule::new(RuleKind::Repetition(rule.clone()))),
            _ => Ok(sequence(self.clone(), self.repeat())),
        }
    }

    /// This rule, exactly `n` times: a Sequence of `n` shared copies.
    pub fn exactly(&self, n: usize) -> Rule {
        Rule::new(RuleKind::Sequence(vec![self.clone(); n]))
    }

    /// This rule, between `min` and `min + max` times: `min` mandatory copies
    /// followed by `max` optional copies.
    pub fn many(&self, min: usize, max: usize) -> Rule {
        let mut rules = vec![self.clone(); min];
        rules.extend((0..max).map(|_| self.optional()));
        Rule::new(RuleKind::Sequence(rules))
    }
}

/// `a` then `b`, in order.
///
/// Always wraps exactly `[a, b]`, adding one level of nesting even when `a`
/// is itself a Sequence. Deliberately asymmetric with [`alternate`], which
/// flattens on the left.
pub fn sequence(a: impl Into<Rule>, b: impl Into<Rule>) -> Rule {
    Rule::new(RuleKind::Sequence(vec![a.into(), b.into()]))
}

/// `a`, or failing that, `b`. Order is significant: earlier alternatives
/// shadow later ones whenever both could match a prefix of the same input.
///
/// When `a` is already an Alternation, `b` is appended to its children (the
/// operand itself is unchanged), so chaining many alternatives left-to-right
/// stays flat instead of right-nesting.
pub fn alternate(a: impl Into<Rule>, b: impl Into<Rule>) -> Rule {
    let (a, b) = (a.into(), b.into());
    match &*a.0 {
        RuleKind::Alternation(rules) => {
            let mut rules = rules.clone();
            rules.push(b);
            Rule::new(RuleKind::Alternation(rules))
        }
        _ => Rule::new(RuleKind::Alternation(vec![a, b])),
    }
}

impl From<&str> for Rule {
    /// String operands of [`sequence`], [`alternate`] and
    /// [`Rule::ignore`] are normalized into Literal rules at construction.
    fn from(text: &str) -> Rule {
        Rule::literal(text)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &*self.0 {
            RuleKind::Literal(text) => write!(f, "\"{}\"", text.escape_default()),
            RuleKind::Pattern { pattern, .. } => write!(f, "/{}/", pattern.escape_default()),
            RuleKind::Sequence(rules) => write_joined(f, rules, " + "),
            RuleKind::Alternation(rules) => write_joined(f, rules, " | "),
            RuleKind::Repetition(rule) => write!(f, "{}*", rule),
            RuleKind::Optional(rule) => write!(f, "{}?", rule),
            RuleKind::Atom(rule) => write!(f, "[{}]", rule),
            RuleKind::Ignore { rule, .. } => write!(f, "{}", rule),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter, rules: &[Rule], sep: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, rule) in rules.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", sep)?;
        }
        write!(f, "{}", rule)?;
    }
    write!(f, ")")
}
