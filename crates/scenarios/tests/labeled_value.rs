use scenarios::{
    AsLabeled, Describe, LabelAll, LabelMode, LabeledValue, combine, describe_via_display, wrap,
    wrap_all, wrap_labeled, wrap_with, zip_combined,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Player {
    name: String,
}

impl Player {
    fn new(name: &str) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.name)
    }
}

describe_via_display!(Player);

fn quoted(label: &str) -> String {
    format!("\"{label}\"")
}

type Creation = fn(&'static str) -> LabeledValue<&'static str>;
type LabeledCreation = fn(&'static str, &'static str) -> LabeledValue<&'static str>;

fn creations_with_arbitrary_label() -> Vec<(&'static str, Creation)> {
    vec![
        ("constructor", LabeledValue::new as Creation),
        ("wrap without label", wrap as Creation),
        (
            "wrap with label",
            (|data: &'static str| wrap_labeled(data, "description")) as Creation,
        ),
        (
            "wrap with selected label",
            (|data: &'static str| wrap_with(data, |d| format!("{d} description"))) as Creation,
        ),
    ]
}

fn creations_from_data_and_label() -> Vec<(&'static str, LabeledCreation)> {
    vec![
        (
            "constructor then with_label",
            (|data: &'static str, label: &'static str| LabeledValue::new(data).with_label(label))
                as LabeledCreation,
        ),
        (
            "wrap then with_label",
            (|data: &'static str, label: &'static str| wrap(data).with_label(label))
                as LabeledCreation,
        ),
        ("wrap_labeled", wrap_labeled as LabeledCreation),
        (
            "wrap_with returning a constant",
            (|data: &'static str, label: &'static str| {
                wrap_with(data, move |_| label.to_string())
            }) as LabeledCreation,
        ),
    ]
}

#[test]
fn labeled_values_wrap_data() {
    for (name, create) in creations_with_arbitrary_label() {
        assert_eq!(*create("data").data(), "data", "{name}");
    }
}

#[test]
fn label_sets_display_output() {
    for (name, create) in creations_from_data_and_label() {
        let value = create("data", "description");
        assert_eq!(*value.data(), "data", "{name}");
        assert_eq!(value.to_string(), quoted("description"), "{name}");
        assert_eq!(value.mode(), LabelMode::Explicit, "{name}");
    }
}

#[test]
fn default_label_is_data_string_form() {
    assert_eq!(wrap("data").to_string(), quoted("data"));
    assert_eq!(LabeledValue::new("data").to_string(), quoted("data"));
    assert_eq!(wrap("ryu").to_string(), "\"ryu\"");
    assert_eq!(wrap(Player::new("ryu")).to_string(), quoted("Player(ryu)"));
    assert_eq!(wrap(None::<Player>).to_string(), quoted(""));
}

#[test]
fn sequences_display_their_contents_or_label() {
    assert_eq!(wrap(vec![1, 2, 3]).to_string(), "\"[1, 2, 3]\"");
    assert_eq!(
        wrap_labeled(vec![1, 2, 3], "three numbers").to_string(),
        "\"three numbers\""
    );
}

#[test]
fn with_transformed_label_transforms_existing_label() {
    let transform = |label: &str| format!("transformed {label}");
    for (name, create) in creations_from_data_and_label() {
        let value = create("data", "description").with_transformed_label(transform);
        assert_eq!(*value.data(), "data", "{name}");
        assert_eq!(value.to_string(), quoted(&transform("description")), "{name}");
    }
}

#[test]
fn with_transformed_label_transforms_the_default_label() {
    let value = wrap("data").with_transformed_label(|label| format!("[{label}]"));
    assert_eq!(value.mode(), LabelMode::Implicit);
    assert_eq!(value.to_string(), quoted("[data]"));
}

#[test]
fn with_appended_label_appends_to_existing_label() {
    for (name, create) in creations_from_data_and_label() {
        let value = create("data", "description").with_appended_label("appendage");
        assert_eq!(*value.data(), "data", "{name}");
        assert_eq!(value.to_string(), quoted("description appendage"), "{name}");
    }
}

#[test]
fn with_transformed_data_keeps_explicit_labels() {
    for (name, create) in creations_from_data_and_label() {
        let value = create("data", "description");
        let before = value.to_string();
        let transformed = value.with_transformed_data(|data| format!("transformed {data}"));
        assert_eq!(transformed.data(), "transformed data", "{name}");
        assert_eq!(
            transformed.to_string(),
            before,
            "{name}: transforming data should not alter an explicit label"
        );
    }
}

#[test]
fn with_transformed_data_recomputes_implicit_labels() {
    let transformed = wrap("data").with_transformed_data(|data| format!("transformed {data}"));
    assert_eq!(transformed.mode(), LabelMode::Implicit);
    assert_eq!(transformed.to_string(), quoted("transformed data"));

    let restyled = wrap(2)
        .with_transformed_label(|label| format!("{label} players"))
        .with_transformed_data(|n| n * 2);
    assert_eq!(restyled.to_string(), quoted("4 players"));
}

#[test]
fn unwrapping_returns_the_wrapped_data() {
    for (name, create) in creations_with_arbitrary_label() {
        let value = create("data");
        let borrowed: &&str = value.as_ref();
        assert_eq!(*borrowed, "data", "{name}");
        assert_eq!(value.into_data(), "data", "{name}");
    }

    let player = Player::new("fei long");
    assert_eq!(player.clone().labeled().into_data(), player);
}

#[test]
fn combined_with_uses_selector_functions() {
    let player = "Ibuki".labeled_as("The player");
    let stage = "Ryu river stage".labeled_as("The stage");

    let player_and_stage = player.combined_with(
        stage,
        |first, second| format!("{first} @ {second}"),
        |first, second| format!("{first} ; {second}"),
    );

    assert_eq!(player_and_stage.data(), "Ibuki @ Ryu river stage");
    assert_eq!(player_and_stage.to_string(), "\"The player ; The stage\"");
    assert_eq!(player_and_stage.mode(), LabelMode::Explicit);
}

#[test]
fn combined_with_sees_effective_labels() {
    let combined = wrap(1)
        .with_appended_label("up")
        .combined_with(wrap_labeled(2, "B"), |a, b| a + b, |a, b| format!("{a}|{b}"));
    assert_eq!(*combined.data(), 3);
    assert_eq!(combined.to_string(), quoted("1 up|B"));
}

#[test]
fn pairing_combinations_pair_up_data_and_labels() {
    type Pairing = fn(
        LabeledValue<&'static str>,
        LabeledValue<&'static str>,
    ) -> LabeledValue<(&'static str, &'static str)>;

    let pairings: [(&str, Pairing); 2] = [
        ("member function", LabeledValue::paired_with as Pairing),
        ("free function", combine as Pairing),
    ];

    for (name, pairing) in pairings {
        let player = wrap_labeled("Vega", "The player");
        let stage = wrap_labeled("Jurassic Era Research Facility", "The stage");

        let player_and_stage = pairing(player, stage);

        assert_eq!(
            *player_and_stage.data(),
            ("Vega", "Jurassic Era Research Facility"),
            "{name}"
        );
        assert_eq!(
            player_and_stage.to_string(),
            quoted("(The player, The stage)"),
            "{name}"
        );
    }
}

#[test]
fn producers_label_whole_sequences() {
    let players = [Player::new("rose"), Player::new("fei long")];
    let labeled: Vec<_> = players.iter().cloned().label_all(|p| p.name.clone()).collect();
    assert_eq!(
        labeled.iter().map(ToString::to_string).collect::<Vec<_>>(),
        ["\"rose\"", "\"fei long\""]
    );

    let from_helper: Vec<_> = wrap_all(players, |p| p.name.to_uppercase()).collect();
    assert_eq!(from_helper[1].to_string(), "\"FEI LONG\"");
    assert_eq!(from_helper[1].data().describe(), "Player(fei long)");
}

#[test]
fn zipped_sequences_pair_element_wise() {
    let players = ["ryu", "m. bison"].label_all(|name| format!("player {name}"));
    let stages = ["suzaku castle", "thailand"].map(wrap);

    let names: Vec<String> = zip_combined(players, stages)
        .map(|pair| pair.to_string())
        .collect();
    assert_eq!(
        names,
        [
            "\"(player ryu, suzaku castle)\"",
            "\"(player m. bison, thailand)\""
        ]
    );
}

#[test]
fn labeled_values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}
    let value = wrap(vec![1, 2]).with_transformed_label(|label| label.replace(", ", "/"));
    assert_send_sync(&value);

    let handle = std::thread::spawn(move || value.to_string());
    assert_eq!(handle.join().ok(), Some(quoted("[1/2]")));
}

#[test]
fn explicit_labels_need_nothing_from_the_data() {
    #[derive(Debug, PartialEq)]
    struct Sku(u32);

    let valid = wrap_labeled(Sku(1), "only valid skus");
    let invalid = Sku(2).labeled_by(|sku| format!("sku {} (invalid)", sku.0));
    assert_eq!(valid.to_string(), quoted("only valid skus"));
    assert_eq!(invalid.to_string(), quoted("sku 2 (invalid)"));

    let pair = combine(valid, invalid);
    assert_eq!(pair.to_string(), quoted("(only valid skus, sku 2 (invalid))"));
    assert_eq!(pair.into_data(), (Sku(1), Sku(2)));

    let table = std::collections::HashMap::<String, u8>::new();
    assert_eq!(wrap_labeled(table, "empty").to_string(), quoted("empty"));
}

#[test]
fn one_shot_relabeling_borrows_local_state() {
    let round = 3;
    let values: Vec<String> = ["ryu", "ken"]
        .map(wrap)
        .into_iter()
        .map(|value| value.with_label_from(|label| format!("round {round}: {label}")))
        .map(|value| value.to_string())
        .collect();
    assert_eq!(values, [quoted("round 3: ryu"), quoted("round 3: ken")]);
}
