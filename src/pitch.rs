//! The home page pitch: how hard the site sells, driven by a 0–100 slider.
//!
//! The narrative is a step function over eight ranges. Within each base the
//! body only grows as the level rises; at [`PIVOT_LEVEL`] the opening text is
//! swapped for a second base.

pub const MAX_LEVEL: u8 = 100;
/// First level of the second narrative base.
pub const PIVOT_LEVEL: u8 = 75;
pub const INLINE_CONTACT_LEVEL: u8 = 80;
pub const CONTACT_PROMPT_LEVEL: u8 = 98;

const INTRO_BASE: &str = "I build clean software—and I’m leveling up in AI/ML and automation.";
const FAST_AND_SIMPLE: &str =
    " I focus on modern apps that feel fast, simple, and reliable, ensuring products don't just work but scale smarter.";
const REAL_TEAMS: &str =
    " I’ve done this in professional teams, prioritizing readable code and shipping changes that don’t create new problems next week.";
const AT_SCALE: &str =
    " I’ve built and improved systems in large-scale settings where clean delivery and practical results actually matter.";
const IDEA_TO_RELEASE: &str =
    " I’ve taken features from concept to deployment in complex environments, ensuring they are genuinely smooth to use.";

const PRO_BASE: &str = "I bring solid experience from professional dev cycles: planning, building, debugging, and delivering. I’m especially interested in automation—scripts, tooling, and workflows that remove friction—plus AI/ML features where they make sense and stay maintainable.";
const SIDE_PROJECTS: &str =
    " My projects are where I push these ideas further: cleaner UX, smarter flows, and experiments with AI/ML and automation.";
const HARD_SELL: &str =
    " Here’s the deal: you can keep doing slow loops and patchy fixes, or you can bring in someone who ships clean work now. If you’re hiring, reach out today.";

/// Slider position, always within `0..=MAX_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SellLevel(u8);

impl SellLevel {
    pub fn new(level: i32) -> Self {
        Self(level.clamp(0, MAX_LEVEL as i32) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<SellLevel> for i32 {
    fn from(level: SellLevel) -> Self {
        level.0 as i32
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub category: &'static str,
    pub headline: &'static str,
    pub body: String,
}

struct PitchStep {
    floor: u8,
    category: &'static str,
    headline: &'static str,
    base: &'static str,
    add_ons: &'static [&'static str],
}

impl PitchStep {
    fn render(&self) -> ContentBlock {
        let body = self
            .add_ons
            .iter()
            .fold(self.base.to_string(), |mut acc, s| {
                acc.push_str(s);
                acc
            });
        ContentBlock {
            category: self.category,
            headline: self.headline,
            body,
        }
    }
}

// ordered by floor; each step covers [floor, next floor)
static PITCH_STEPS: [PitchStep; 8] = [
    PitchStep {
        floor: 0,
        category: "Less hard sell",
        headline: "Hi, I’m Shiv.",
        base: INTRO_BASE,
        add_ons: &[],
    },
    PitchStep {
        floor: 15,
        category: "Still chill",
        headline: "I like shipping useful things.",
        base: INTRO_BASE,
        add_ons: &[FAST_AND_SIMPLE],
    },
    PitchStep {
        floor: 30,
        category: "A bit more",
        headline: "I’ve done this in real teams.",
        base: INTRO_BASE,
        add_ons: &[FAST_AND_SIMPLE, REAL_TEAMS],
    },
    PitchStep {
        floor: 45,
        category: "Proof of life",
        headline: "Yes, I’ve shipped at scale.",
        base: INTRO_BASE,
        add_ons: &[FAST_AND_SIMPLE, REAL_TEAMS, AT_SCALE],
    },
    PitchStep {
        floor: 60,
        category: "Professional Experience",
        headline: "From idea to release.",
        base: INTRO_BASE,
        add_ons: &[FAST_AND_SIMPLE, REAL_TEAMS, AT_SCALE, IDEA_TO_RELEASE],
    },
    PitchStep {
        floor: PIVOT_LEVEL,
        category: "Real-world Dev Cycles",
        headline: "I’ve done this professionally.",
        base: PRO_BASE,
        add_ons: &[],
    },
    PitchStep {
        floor: 90,
        category: "Projects",
        headline: "I build outside work too.",
        base: PRO_BASE,
        add_ons: &[SIDE_PROJECTS],
    },
    PitchStep {
        floor: 97,
        category: "Maximum hard sell",
        headline: "Hire me before your competition does.",
        base: PRO_BASE,
        // keeps the full side-projects sentence so the body only grows
        add_ons: &[SIDE_PROJECTS, HARD_SELL],
    },
];

fn step_for(level: SellLevel) -> &'static PitchStep {
    // floors are ascending and the first is 0, so the index is never negative
    let idx = PITCH_STEPS.partition_point(|s| s.floor <= level.get());
    &PITCH_STEPS[idx.saturating_sub(1)]
}

/// Narrative for a slider position. Out-of-range input is clamped.
pub fn content_for(level: i32) -> ContentBlock {
    step_for(SellLevel::new(level)).render()
}

pub fn show_inline_contact_link(level: i32) -> bool {
    SellLevel::new(level).get() >= INLINE_CONTACT_LEVEL
}

pub fn show_full_screen_contact_prompt(level: i32) -> bool {
    SellLevel::new(level).get() >= CONTACT_PROMPT_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_distinct_blocks() {
        let mut seen: Vec<ContentBlock> = Vec::new();
        for level in 0..=100 {
            let block = content_for(level);
            if !seen.contains(&block) {
                seen.push(block);
            }
        }
        assert_eq!(seen.len(), 8);
        let mut headlines = seen.iter().map(|b| b.headline).collect::<Vec<_>>();
        headlines.dedup();
        assert_eq!(headlines.len(), 8);
    }

    #[test]
    fn test_boundaries_are_lower_inclusive() {
        for floor in [15, 30, 45, 60, 75, 90, 97] {
            assert_ne!(content_for(floor - 1), content_for(floor), "floor {floor}");
            assert_eq!(content_for(floor), step_for(SellLevel::new(floor)).render());
        }
        assert_eq!(content_for(0).category, "Less hard sell");
        assert_eq!(content_for(14).category, "Less hard sell");
        assert_eq!(content_for(15).category, "Still chill");
        assert_eq!(content_for(100).category, "Maximum hard sell");
    }

    #[test]
    fn test_body_accumulates_within_base() {
        for level in 1..PIVOT_LEVEL as i32 {
            let prev = content_for(level - 1).body;
            let cur = content_for(level).body;
            assert!(cur.starts_with(&prev), "level {level} dropped text");
        }
        for level in (PIVOT_LEVEL as i32 + 1)..=100 {
            let prev = content_for(level - 1).body;
            let cur = content_for(level).body;
            assert!(cur.starts_with(&prev), "level {level} dropped text");
        }
        assert_eq!(
            content_for(59).body,
            [INTRO_BASE, FAST_AND_SIMPLE, REAL_TEAMS, AT_SCALE].concat()
        );
    }

    #[test]
    fn test_pivot_swaps_base() {
        let before = content_for(74);
        let after = content_for(75);
        assert!(before.body.starts_with(INTRO_BASE));
        assert!(!before.body.contains(PRO_BASE));
        assert_eq!(after.body, PRO_BASE);
        assert!(!after.body.contains(INTRO_BASE));
    }

    #[test]
    fn test_hard_sell_sentence() {
        assert!(!content_for(96).body.contains(HARD_SELL));
        assert_eq!(
            content_for(97).body,
            [content_for(96).body.as_str(), HARD_SELL].concat()
        );
        for level in 97..=100 {
            let block = content_for(level);
            assert!(block.body.contains(HARD_SELL));
            assert!(block.body.contains(SIDE_PROJECTS));
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(content_for(-1), content_for(0));
        assert_eq!(content_for(i32::MIN), content_for(0));
        assert_eq!(content_for(101), content_for(100));
        assert_eq!(content_for(i32::MAX), content_for(100));
        assert_eq!(SellLevel::new(300).get(), MAX_LEVEL);
        assert_eq!(SellLevel::new(-5).get(), 0);
    }

    #[test]
    fn test_contact_gates() {
        assert!(!show_inline_contact_link(79));
        assert!(show_inline_contact_link(80));
        assert!(show_inline_contact_link(100));
        assert!(!show_full_screen_contact_prompt(97));
        assert!(show_full_screen_contact_prompt(98));
        assert!(show_full_screen_contact_prompt(100));
        assert!(show_full_screen_contact_prompt(1000));
        assert!(!show_inline_contact_link(-3));
    }
}
