use crate::chem::category::{CATEGORIES, Category};
use crate::chem::element::{Element, StateOfMatter};
use crate::chem::orbital::Subshell;
use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Stable question identity: source element plus template slot (1 to 20).
///
/// Template numbers are fixed, so a skipped template leaves a gap rather
/// than renumbering the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId {
    pub element: u8,
    pub template: u8,
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.element, self.template)
    }
}

/// One multiple-choice question. `options` always contains `answer`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
    pub element: u8,
}

/// Which reference field textual distractors are drawn from.
#[derive(Clone, Copy)]
enum TextField {
    Name,
    Symbol,
}

/// Builds quiz questions from element attributes plus randomized
/// distractors. Owns its random source so tests can pin outputs.
pub struct QuizGenerator {
    rng: ChaCha8Rng,
}

impl QuizGenerator {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Up to 20 questions for one element, in template order. Templates
    /// whose prerequisite attribute is absent are skipped; an unknown
    /// atomic number yields no questions.
    pub fn questions_for_element(&mut self, atomic_number: u8) -> Vec<QuizQuestion> {
        let Some(element) = Element::by_atomic_number(atomic_number) else {
            return Vec::new();
        };
        let name = element.name;
        let mut questions = Vec::new();

        // 1: atomic number
        let options = self.numeric_options(i64::from(atomic_number));
        questions.push(self.question(
            &element,
            1,
            format!("What is the atomic number of {name}?"),
            options,
            atomic_number.to_string(),
        ));

        // 2: symbol
        let options = self.text_options(element.symbol, TextField::Symbol);
        questions.push(self.question(
            &element,
            2,
            format!("What is the chemical symbol of {name}?"),
            options,
            element.symbol.to_string(),
        ));

        // 3: name from symbol
        let options = self.text_options(element.name, TextField::Name);
        questions.push(self.question(
            &element,
            3,
            format!(
                "What is the full name of the element with symbol {}?",
                element.symbol
            ),
            options,
            element.name.to_string(),
        ));

        // 4: group, absent for the lanthanide and actinide series
        if let Some(group) = element.group {
            let options = self.numeric_options(i64::from(group));
            questions.push(self.question(
                &element,
                4,
                format!("In which group of the periodic table is {name} located?"),
                options,
                group.to_string(),
            ));
        }

        // 5: period
        let options = self.numeric_options(i64::from(element.period));
        questions.push(self.question(
            &element,
            5,
            format!("In which period of the periodic table is {name} located?"),
            options,
            element.period.to_string(),
        ));

        // 6: block
        let blocks = [Subshell::S, Subshell::P, Subshell::D, Subshell::F];
        let mut options = vec![element.block.to_string()];
        options.extend(
            blocks
                .iter()
                .filter(|block| **block != element.block)
                .map(Subshell::to_string),
        );
        questions.push(self.question(
            &element,
            6,
            format!("Which block does {name} belong to?"),
            options,
            element.block.to_string(),
        ));

        // 7: category, distractors taken in the fixed enumeration order
        let mut options = vec![element.category.label().to_string()];
        options.extend(
            CATEGORIES
                .iter()
                .filter(|category| **category != element.category)
                .take(3)
                .map(|category| category.label().to_string()),
        );
        questions.push(self.question(
            &element,
            7,
            format!("What is the category of {name}?"),
            options,
            element.category.label().to_string(),
        ));

        // 8: atomic mass, two decimal places
        let (options, answer) = self.mass_options(element.mass_or_estimate());
        questions.push(self.question(
            &element,
            8,
            format!("What is the approximate atomic mass of {name}?"),
            options,
            answer,
        ));

        // 9: protons
        let options = self.numeric_options(i64::from(atomic_number));
        questions.push(self.question(
            &element,
            9,
            format!("How many protons does {name} have?"),
            options,
            atomic_number.to_string(),
        ));

        // 10: neutrons
        let neutrons = element.neutron_estimate();
        let options = self.numeric_options(neutrons as i64);
        questions.push(self.question(
            &element,
            10,
            format!("Approximately how many neutrons does {name} have?"),
            options,
            neutrons.to_string(),
        ));

        // 11: electrons
        let options = self.numeric_options(i64::from(atomic_number));
        questions.push(self.question(
            &element,
            11,
            format!("How many electrons does a neutral atom of {name} have?"),
            options,
            atomic_number.to_string(),
        ));

        // 12: valence electrons
        let valence = element.valence_estimate();
        let options = self.numeric_options(i64::from(valence));
        questions.push(self.question(
            &element,
            12,
            format!("How many valence electrons does {name} typically have?"),
            options,
            valence.to_string(),
        ));

        // 13: state at room temperature, three options
        let state = element.state_at_room_temp();
        let mut options = vec![state.label().to_string()];
        options.extend(
            [
                StateOfMatter::Solid,
                StateOfMatter::Liquid,
                StateOfMatter::Gas,
            ]
            .iter()
            .filter(|other| **other != state)
            .map(|other| other.label().to_string()),
        );
        questions.push(self.question(
            &element,
            13,
            format!("What is the typical state of {name} at room temperature?"),
            options,
            state.label().to_string(),
        ));

        // 14: metal / nonmetal / metalloid, three options
        let classification = element.classification();
        let mut options = vec![classification.label().to_string()];
        options.extend(
            ["Metal", "Nonmetal", "Metalloid"]
                .iter()
                .filter(|label| **label != classification.label())
                .map(|label| label.to_string()),
        );
        questions.push(self.question(
            &element,
            14,
            format!("Is {name} a metal, nonmetal, or metalloid?"),
            options,
            classification.label().to_string(),
        ));

        // 15: neighbors, or nearest neighbor at the table edges
        if let (Some(previous), Some(next)) =
            (neighbor(atomic_number, -1), neighbor(atomic_number, 1))
        {
            let answer = format!("{} and {}", previous.name, next.name);
            let options = vec![
                answer.clone(),
                format!("{} and {}", next.name, previous.name),
                format!(
                    "{} and {}",
                    neighbor_name(atomic_number, -2),
                    neighbor_name(atomic_number, 2)
                ),
                format!(
                    "{} and {}",
                    neighbor_name(atomic_number, -3),
                    neighbor_name(atomic_number, 3)
                ),
            ];
            questions.push(self.question(
                &element,
                15,
                format!("{name} is located between which two elements?"),
                options,
                answer,
            ));
        } else if let Some(closest) = neighbor(atomic_number, 1).or_else(|| neighbor(atomic_number, -1))
        {
            let mut options = vec![closest.name.to_string()];
            let mut used = HashSet::from([element.name, closest.name]);
            for candidate in Element::all() {
                if options.len() == 4 {
                    break;
                }
                if used.insert(candidate.name) {
                    options.push(candidate.name.to_string());
                }
            }
            let answer = closest.name.to_string();
            questions.push(self.question(
                &element,
                15,
                format!("Which element is closest to {name} in atomic number?"),
                options,
                answer,
            ));
        }

        // 16 to 19: yes/no category checks, two options each
        let checks = [
            (16, format!("Is {name} a noble gas?"), Category::NobleGas),
            (17, format!("Is {name} an alkali metal?"), Category::AlkaliMetal),
            (
                18,
                format!("Is {name} a transition metal?"),
                Category::TransitionMetal,
            ),
            (19, format!("Is {name} a halogen?"), Category::Halogen),
        ];
        for (template, prompt, category) in checks {
            let answer = if element.category == category {
                "Yes"
            } else {
                "No"
            };
            let options = vec!["Yes".to_string(), "No".to_string()];
            questions.push(self.question(&element, template, prompt, options, answer.to_string()));
        }

        // 20: period edge question, or a higher-atomic-number question
        let first_in_period = Element::all()
            .iter()
            .find(|mate| mate.period == element.period);
        let last_in_period = Element::all()
            .iter()
            .rfind(|mate| mate.period == element.period);
        let is_first = first_in_period.is_some_and(|mate| mate.atomic_number == atomic_number);
        let is_last = last_in_period.is_some_and(|mate| mate.atomic_number == atomic_number);

        if is_first || is_last {
            let (answer, opposite) = if is_first {
                ("First", "Last")
            } else {
                ("Last", "First")
            };
            let options = vec![
                answer.to_string(),
                opposite.to_string(),
                "Neither".to_string(),
                "Both".to_string(),
            ];
            questions.push(self.question(
                &element,
                20,
                format!("Is {name} the first or last element in its period?"),
                options,
                answer.to_string(),
            ));
        } else {
            let fallback = |offset: i16| {
                neighbor(atomic_number, offset)
                    .map_or_else(|| "None".to_string(), |e| e.name.to_string())
            };
            let answer = fallback(1);
            let options = vec![answer.clone(), fallback(-1), fallback(2), fallback(-2)];
            questions.push(self.question(
                &element,
                20,
                format!("Which element has a higher atomic number than {name}?"),
                options,
                answer,
            ));
        }

        questions
    }

    /// Pools every question for the requested elements, then picks up to
    /// `count_per_element` per element, backfilling across elements when a
    /// quota cannot be met. Never returns more than elements x count.
    pub fn random_questions(
        &mut self,
        atomic_numbers: &[u8],
        count_per_element: usize,
    ) -> Vec<QuizQuestion> {
        let mut pool = Vec::new();
        for &atomic_number in atomic_numbers {
            pool.extend(self.questions_for_element(atomic_number));
        }
        pool.shuffle(&mut self.rng);

        let target = atomic_numbers.len() * count_per_element;
        let mut selected = Vec::with_capacity(target.min(pool.len()));
        let mut leftovers = Vec::new();
        let mut per_element: HashMap<u8, usize> = HashMap::new();

        // First pass honors the per-element quota.
        for question in pool {
            let taken = per_element.entry(question.element).or_insert(0);
            if selected.len() < target && *taken < count_per_element {
                *taken += 1;
                selected.push(question);
            } else {
                leftovers.push(question);
            }
        }

        // Second pass backfills slots left open by skipped templates.
        if selected.len() < target {
            let chosen: HashSet<QuestionId> = selected.iter().map(|q| q.id).collect();
            for question in leftovers {
                if selected.len() >= target {
                    break;
                }
                if !chosen.contains(&question.id) {
                    selected.push(question);
                }
            }
        }

        if selected.len() < target {
            debug!(
                "quiz selection fell short: {} of {} requested questions",
                selected.len(),
                target
            );
        }

        selected.truncate(target);
        selected.shuffle(&mut self.rng);
        selected
    }

    fn question(
        &mut self,
        element: &Element,
        template: u8,
        prompt: String,
        mut options: Vec<String>,
        answer: String,
    ) -> QuizQuestion {
        options.shuffle(&mut self.rng);
        QuizQuestion {
            id: QuestionId {
                element: element.atomic_number,
                template,
            },
            prompt,
            options,
            answer,
            element: element.atomic_number,
        }
    }

    /// Correct value first, then three distinct offset distractors.
    /// Distractors below one reflect to stay positive.
    fn numeric_options(&mut self, correct: i64) -> Vec<String> {
        let mut used = HashSet::from([correct]);
        let mut options = vec![correct.to_string()];
        while options.len() < 4 {
            let mut value = correct + self.rng.gen_range(-10..=10);
            if value < 1 {
                value = value.abs() + 1;
            }
            if used.insert(value) {
                options.push(value.to_string());
            }
        }
        options
    }

    /// Mass options rendered to two decimals; distinctness is enforced on
    /// the rendered strings.
    fn mass_options(&mut self, correct: f64) -> (Vec<String>, String) {
        let answer = format!("{correct:.2}");
        let mut options = vec![answer.clone()];
        let mut used = HashSet::from([answer.clone()]);
        while options.len() < 4 {
            let mut value = correct + f64::from(self.rng.gen_range(-10i32..=10));
            if value < 1.0 {
                value = value.abs() + 1.0;
            }
            let rendered = format!("{value:.2}");
            if used.insert(rendered.clone()) {
                options.push(rendered);
            }
        }
        (options, answer)
    }

    /// Correct value first, then three other elements' values from the
    /// matching field.
    fn text_options(&mut self, correct: &str, field: TextField) -> Vec<String> {
        let mut used = HashSet::from([correct.to_string()]);
        let mut options = vec![correct.to_string()];
        while options.len() < 4 {
            let index = self.rng.gen_range(0..Element::all().len());
            let candidate = &Element::all()[index];
            let value = match field {
                TextField::Name => candidate.name,
                TextField::Symbol => candidate.symbol,
            };
            if used.insert(value.to_string()) {
                options.push(value.to_string());
            }
        }
        options
    }
}

impl Default for QuizGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn neighbor(atomic_number: u8, offset: i16) -> Option<Element> {
    let target = i16::from(atomic_number) + offset;
    u8::try_from(target).ok().and_then(Element::by_atomic_number)
}

fn neighbor_name(atomic_number: u8, offset: i16) -> String {
    neighbor(atomic_number, offset).map_or_else(|| "Unknown".to_string(), |e| e.name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_distinct_options(question: &QuizQuestion) {
        let unique: HashSet<&String> = question.options.iter().collect();
        assert_eq!(
            unique.len(),
            question.options.len(),
            "duplicate option in {}: {:?}",
            question.id,
            question.options
        );
    }

    #[test]
    fn carbon_gets_all_twenty_templates() {
        let questions = QuizGenerator::with_seed(1).questions_for_element(6);
        assert_eq!(questions.len(), 20);
        let templates: Vec<u8> = questions.iter().map(|q| q.id.template).collect();
        assert_eq!(templates, (1..=20).collect::<Vec<u8>>());
        assert!(questions.iter().all(|q| q.element == 6));
    }

    #[test]
    fn lanthanides_skip_the_group_template() {
        let questions = QuizGenerator::with_seed(2).questions_for_element(58);
        assert_eq!(questions.len(), 19);
        assert!(questions.iter().all(|q| q.id.template != 4));
    }

    #[test]
    fn unknown_element_yields_nothing() {
        assert!(QuizGenerator::with_seed(3).questions_for_element(0).is_empty());
        assert!(
            QuizGenerator::with_seed(3)
                .questions_for_element(200)
                .is_empty()
        );
    }

    #[test]
    fn options_always_contain_the_answer_and_never_repeat() {
        let mut generator = QuizGenerator::with_seed(4);
        for z in 1..=118u8 {
            for question in generator.questions_for_element(z) {
                assert!(
                    question.options.contains(&question.answer),
                    "answer missing from options in {}",
                    question.id
                );
                assert_distinct_options(&question);
            }
        }
    }

    #[test]
    fn option_counts_match_the_template_kind() {
        let questions = QuizGenerator::with_seed(5).questions_for_element(26);
        for question in &questions {
            let expected = match question.id.template {
                13 | 14 => 3,
                16..=19 => 2,
                _ => 4,
            };
            assert_eq!(
                question.options.len(),
                expected,
                "wrong option count in {}",
                question.id
            );
        }
    }

    #[test]
    fn prompts_use_the_element_name() {
        let questions = QuizGenerator::with_seed(6).questions_for_element(79);
        assert_eq!(
            questions[0].prompt,
            "What is the atomic number of Gold?"
        );
        assert_eq!(questions[0].answer, "79");
        let mass = questions.iter().find(|q| q.id.template == 8).unwrap();
        assert_eq!(mass.answer, "196.97");
    }

    #[test]
    fn hydrogen_edge_asks_for_the_nearest_neighbor() {
        let questions = QuizGenerator::with_seed(7).questions_for_element(1);
        let neighbor_question = questions.iter().find(|q| q.id.template == 15).unwrap();
        assert_eq!(
            neighbor_question.prompt,
            "Which element is closest to Hydrogen in atomic number?"
        );
        assert_eq!(neighbor_question.answer, "Helium");
        assert_distinct_options(neighbor_question);

        let edge_question = questions.iter().find(|q| q.id.template == 20).unwrap();
        assert_eq!(edge_question.answer, "First");
        assert!(edge_question.options.contains(&"Both".to_string()));
    }

    #[test]
    fn interior_elements_sit_between_their_neighbors() {
        let questions = QuizGenerator::with_seed(8).questions_for_element(6);
        let between = questions.iter().find(|q| q.id.template == 15).unwrap();
        assert_eq!(between.answer, "Boron and Nitrogen");
        assert!(between.options.contains(&"Nitrogen and Boron".to_string()));

        let higher = questions.iter().find(|q| q.id.template == 20).unwrap();
        assert_eq!(higher.prompt, "Which element has a higher atomic number than Carbon?");
        assert_eq!(higher.answer, "Nitrogen");
    }

    #[test]
    fn yes_no_checks_match_the_category() {
        let mut generator = QuizGenerator::with_seed(9);
        let neon = generator.questions_for_element(10);
        let noble = neon.iter().find(|q| q.id.template == 16).unwrap();
        assert_eq!(noble.answer, "Yes");
        let alkali = neon.iter().find(|q| q.id.template == 17).unwrap();
        assert_eq!(alkali.answer, "No");

        let sodium = generator.questions_for_element(11);
        let alkali = sodium.iter().find(|q| q.id.template == 17).unwrap();
        assert_eq!(alkali.answer, "Yes");
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let first = QuizGenerator::with_seed(42).questions_for_element(30);
        let second = QuizGenerator::with_seed(42).questions_for_element(30);
        assert_eq!(first, second);
    }

    #[test]
    fn random_questions_honors_a_single_element_quota() {
        let questions = QuizGenerator::with_seed(10).random_questions(&[6], 10);
        assert_eq!(questions.len(), 10);
        assert!(questions.iter().all(|q| q.element == 6));

        let ids: HashSet<QuestionId> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn random_questions_splits_evenly_across_elements() {
        let questions = QuizGenerator::with_seed(11).random_questions(&[1, 8], 5);
        assert_eq!(questions.len(), 10);
        let from_hydrogen = questions.iter().filter(|q| q.element == 1).count();
        let from_oxygen = questions.iter().filter(|q| q.element == 8).count();
        assert_eq!(from_hydrogen, 5);
        assert_eq!(from_oxygen, 5);
    }

    #[test]
    fn random_questions_tolerates_short_pools() {
        // Cerium has 19 eligible templates, so a request for 25 falls short.
        let questions = QuizGenerator::with_seed(12).random_questions(&[58], 25);
        assert_eq!(questions.len(), 19);
    }

    #[test]
    fn random_questions_of_nothing_is_empty() {
        assert!(
            QuizGenerator::with_seed(13)
                .random_questions(&[], 5)
                .is_empty()
        );
    }
}
