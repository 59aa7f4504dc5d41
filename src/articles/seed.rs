//! Built-in articles shipped with stoa.
//!
//! Three short pieces on Stoic practice, inserted on first run and
//! marked `seeded` so user edits never touch them.

use super::types::{compute_read_time, Article, Category};

/// The seeded article set.
#[must_use]
pub fn seed_articles() -> Vec<Article> {
    vec![
        make(
            "Control What You Can Control",
            "The core of Stoic wisdom: focus on what is up to you, and accept what is not.",
            Category::CorePrinciples,
            CONTROL_BODY,
        ),
        make(
            "Growth Through Adversity",
            "Difficulty is not an obstacle to practice. It is the practice.",
            Category::PracticeGuide,
            ADVERSITY_BODY,
        ),
        make(
            "The Wisdom of the Present",
            "Attend to this moment, unbound by the past and unworried about the future.",
            Category::Mindfulness,
            PRESENT_BODY,
        ),
    ]
}

fn make(title: &str, excerpt: &str, category: Category, body: &str) -> Article {
    let mut article = Article::new(
        title.to_string(),
        excerpt.to_string(),
        body.to_string(),
        category,
    );
    article.seeded = true;
    article.read_time = compute_read_time(body);
    article
}

const CONTROL_BODY: &str = "\
One of the most important principles in Stoic philosophy is the clear \
division between what we can control and what we cannot.

Epictetus put it plainly: some things are up to us and some are not. Up \
to us are our opinions, our pursuits, our desires and aversions - in a \
word, our own actions. Not up to us are our bodies, our property, our \
reputation and our standing - in a word, everything that is not our own \
doing.

The principle sounds simple, but living by it takes constant awareness \
and training. When we meet a setback, we tend to spend our energy on \
exactly the things we cannot control: other people's opinions, future \
outcomes, past mistakes.

The Stoics teach us to turn that attention toward the territory where we \
actually have influence - our attitude, our effort, our choices. This is \
not passive resignation. It is active focus: investing limited energy \
where it can genuinely matter.

Ask yourself each day:

- Of today's challenges, which are within my control?
- What am I anxious about that I cannot control?
- Where should my attention go instead?

Practiced over time, this way of thinking yields a quiet mind and a real \
kind of strength.";

const ADVERSITY_BODY: &str = "\
Marcus Aurelius wrote in his Meditations that the impediment to action \
advances action, and that what stands in the way becomes the way.

That line captures the Stoic view of hardship. We usually treat adversity \
as misfortune, something to avoid. The Stoics saw those same experiences \
as rare opportunities to develop wisdom, courage and resilience.

Think of how a muscle is trained: without resistance it never grows \
stronger. Without challenge, character gets no exercise either. Every \
difficulty tests our values, probes our principles, and gives us a chance \
to practice what we claim to have learned.

When you face something hard, ask:

- What can this challenge teach me?
- Which Stoic principle applies here?
- How might this experience make me stronger?

We do not choose what happens to us, but we always choose how to respond. \
It is in those choices that character is made.

The difficulty is temporary. The wisdom and strength we take from it \
stay. Every adversity is an invitation to become a better version of \
ourselves.";

const PRESENT_BODY: &str = "\
Marcus Aurelius reminds us to confine ourselves to the present. The past \
no longer exists and the future has not yet arrived; the only moment we \
hold is this one.

Modern life pulls hard in both directions. We replay old mistakes and \
rehearse futures that may never come. That habit does more than waste \
energy - it takes away our capacity to experience the moment we are \
actually in.

Stoic practice insists that real life happens now. This moment is the \
only time we can truly influence. We cannot change the past, and we never \
fully control the future, but we can use the present well.

Try a short exercise in present awareness:

- Breathe deeply and feel the air move in and out of your body
- Notice your surroundings - what you can see, hear and feel
- Bring your attention back to the task at hand
- When the mind drifts to past or future, gently return it to now

None of this forbids learning from the past or planning ahead. On the \
contrary: when we are fully present, we learn more deeply and plan more \
wisely.

The present is where our power lives. Here we choose our attitude, decide \
our actions, and shape our character.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_articles() {
        let seeds = seed_articles();
        assert_eq!(seeds.len(), 3);

        for article in &seeds {
            assert!(article.seeded);
            assert!(article.published);
            assert!(!article.title.is_empty());
            assert!(!article.excerpt.is_empty());
            assert!(article.body.split_whitespace().count() > 100);
        }
    }

    #[test]
    fn test_seed_categories() {
        let seeds = seed_articles();
        assert_eq!(seeds[0].category, Category::CorePrinciples);
        assert_eq!(seeds[1].category, Category::PracticeGuide);
        assert_eq!(seeds[2].category, Category::Mindfulness);
    }
}
