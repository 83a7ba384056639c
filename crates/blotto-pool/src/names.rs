//! Whimsical names for opponents generated by the random archetype.

/// Fixed pool of names the random archetype draws from.
pub const NAME_POOL: [&str; 50] = [
    "chaotic_pigeon",
    "confused_duck",
    "lucky_toaster",
    "noisy_pickle",
    "clueless_blob",
    "wobbly_melon",
    "jelly_sword",
    "forgotten_spoon",
    "sneaky_grape",
    "fuzzy_triangle",
    "zigzag_lizard",
    "unicorn_dust",
    "tired_shark",
    "spinning_hat",
    "wandering_cactus",
    "lonely_penguin",
    "shrinking_sun",
    "paranoid_fish",
    "quantum_fork",
    "leftover_muffin",
    "slippery_egg",
    "banana_shadow",
    "hollow_cheese",
    "rattling_canoe",
    "phantom_carrot",
    "spaghetti_hammer",
    "inverted_umbrella",
    "chattering_walrus",
    "digital_doughnut",
    "vacuum_salmon",
    "fractured_chair",
    "singing_thermometer",
    "burnt_ravioli",
    "enchanted_ladder",
    "grumpy_cloud",
    "ticklish_paperclip",
    "melting_icecube",
    "loose_kite",
    "secret_baguette",
    "detached_tentacle",
    "bouncing_snail",
    "echoing_crayon",
    "nostalgic_monkey",
    "fragmented_trombone",
    "blinking_fruit",
    "rusty_alarm",
    "compressed_mango",
    "looping_ostrich",
    "delirious_banana",
    "floating_compass",
];
