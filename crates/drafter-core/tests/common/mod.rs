use drafter_core::{Container, Draft, DrafterBuilder};

/// The worked example stream: one record per line, ASCII only.
pub const SAMPLE_STREAM: &str = concat!(
    "{\"type\":\"root-init\",\"name\":\"Launch Plan\"}\n",
    "{\"type\":\"container\",\"id\":\"c1\",\"name\":\"Phase 1\"}\n",
    "{\"type\":\"item\",\"id\":\"i1\",\"containerId\":\"c1\",\"name\":\"Draft spec\"}\n",
    "{\"type\":\"sub-item\",\"itemId\":\"i1\",\"name\":\"Write intro\"}\n",
    "{\"type\":\"complete\",\"message\":\"done\"}\n",
);

/// Initializes test logging once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a draft by feeding the whole input as a single chunk.
pub fn build_whole(input: &str) -> Draft {
    build_chunked([input])
}

/// Builds a draft by feeding the given chunks in order, then flushing.
pub fn build_chunked<'a, I>(chunks: I) -> Draft
where
    I: IntoIterator<Item = &'a str>,
{
    init_logging();
    let mut drafter = DrafterBuilder::new().build();
    for chunk in chunks {
        drafter.feed(chunk);
    }
    drafter.flush();
    drafter.into_draft()
}

/// Asserts two drafts carry the same content.
///
/// Build identity (draft id, creation timestamp) and generated sub-item ids
/// embed per-build values and are excluded from the comparison.
pub fn assert_same_draft(a: &Draft, b: &Draft) {
    assert_eq!(a.name, b.name);
    assert_eq!(a.description, b.description);
    assert_eq!(scrubbed_containers(a), scrubbed_containers(b));
    assert_eq!(a.summary, b.summary);
    assert_eq!(a.message, b.message);
    assert_eq!(a.is_building, b.is_building);
}

fn scrubbed_containers(draft: &Draft) -> Vec<Container> {
    let mut containers = draft.containers.clone();
    for container in &mut containers {
        for item in &mut container.items {
            for sub_item in &mut item.sub_items {
                sub_item.id = String::new();
            }
        }
    }
    containers
}
