use quiz_core::model::Roadmap;
use services::QuizOutcome;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadmapRowVm {
    pub label: &'static str,
    pub description: &'static str,
    pub class: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TallyRowVm {
    pub label: &'static str,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub stream_key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub badge_class: String,
    pub careers: Vec<&'static str>,
    pub roadmap: Vec<RoadmapRowVm>,
    pub tally: Vec<TallyRowVm>,
    pub match_label: String,
}

/// Depth-first rows so children render directly beneath their parent.
fn map_roadmap(roadmap: &Roadmap) -> Vec<RoadmapRowVm> {
    let mut rows = Vec::with_capacity(roadmap.milestones().len());
    let mut stack = vec![(roadmap.root(), 0_usize)];
    while let Some((milestone, depth)) = stack.pop() {
        rows.push(RoadmapRowVm {
            label: milestone.label,
            description: milestone.description,
            class: format!("roadmap__item roadmap__item--depth-{depth}"),
        });
        let children: Vec<_> = roadmap.children(milestone.id).collect();
        for child in children.into_iter().rev() {
            stack.push((child, depth + 1));
        }
    }
    rows
}

#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn map_result(outcome: &QuizOutcome) -> ResultVm {
    let profile = outcome.profile;
    let percent = (outcome.confidence() * 100.0).round() as u32;

    ResultVm {
        stream_key: outcome.stream.key(),
        title: profile.title,
        description: profile.description,
        badge_class: format!("badge badge--{}", profile.accent),
        careers: profile.careers.to_vec(),
        roadmap: map_roadmap(&outcome.stream.roadmap()),
        tally: outcome
            .tally
            .iter()
            .map(|(stream, count)| TallyRowVm {
                label: stream.profile().title,
                count,
            })
            .collect(),
        match_label: format!(
            "{} of {} answers ({percent}%)",
            outcome.tally.count(outcome.stream),
            outcome.answered
        ),
    }
}
