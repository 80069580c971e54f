//! Static game content: attribute phrases for questions and task prompts.
//!
//! Every party copies these lists at creation. Nothing here is ever mutated.

pub const POSITIVE_ATTRIBUTES: &[&str] = &[
    "good looking",
    "smart",
    "kind",
    "loyal",
    "funny",
    "charming",
    "creative",
    "confident",
    "calm",
    "adventurous",
    "caring",
    "supportive",
    "honest",
    "reliable",
    "talented",
    "romantic",
    "energetic",
    "wise",
    "a good listener",
    "well dressed",
];

pub const NEGATIVE_ATTRIBUTES: &[&str] = &[
    "a drama magnet",
    "always late",
    "an over thinker",
    "phone addicted",
    "too honest",
    "a chaos maker",
    "talkative",
    "a daydreamer",
    "a snack thief",
    "forgetful",
    "easily distracted",
    "a meme addict",
    "a procrastinator",
    "always confused",
    "a loud laugher",
    "a sleepy head",
    "an over reactor",
    "a control freak",
    "a bit clumsy",
    "a pain in the neck",
];

pub const POSITIVE_TASKS: &[&str] = &[
    "Tell the best memory you have with someone in this room.",
    "Say one true compliment about each person here, short and sweet.",
    "Tell a story when you felt really proud of yourself.",
    "Describe your dream trip and who here you would take with you and why.",
    "Tell a funny story about yourself that most people here do not know.",
    "Share one thing you really like about the person who created this party.",
    "Share one thing you really like about the person on your right.",
    "Share one thing you really like about the person on your left.",
    "Tell the group what you think is your secret super power and why.",
    "Tell the funniest moment you remember with this group.",
    "Do a short pantomime of a moment you loved in your life and let people guess what it was.",
    "Sing one chorus of a song you like, the group can sing with you.",
    "Do a thirty second dance like you just won the lottery.",
    "Act out your perfect morning using only gestures.",
    "Pick a person here and try to imitate their walk for ten seconds in a kind way.",
    "Do a fake award speech as if you just won an Oscar and thank people in this room.",
    "Make up a short slogan for this group and say it like an advertisement.",
    "Pretend you are the host of a talk show and introduce each person in one sentence.",
    "Choose a song and do a dramatic slow motion performance for ten seconds.",
    "Act out your favorite movie scene without naming the movie.",
    "Choose one person and share one thing you learned from them.",
    "Ask everyone to close their eyes, then describe one positive trait for each person.",
    "Let the group ask you three questions about anything and you must answer honestly.",
    "Pick two people and tell the group why they would be a great team in a heist movie.",
    "Create a group selfie pose right now and tell everyone how to stand.",
    "Choose a simple pose and make everyone copy you for a group photo.",
    "Make up a short toast for this group and say it out loud.",
    "Let everyone give you a one word compliment, then repeat them all in one sentence.",
    "Choose a future plan you want to do with this group and share it.",
    "Give each person a funny but kind nickname on the spot.",
];

pub const NEGATIVE_TASKS: &[&str] = &[
    "Pick a song and do your most ridiculous dance for thirty seconds.",
    "Speak in an exaggerated movie trailer voice for one minute.",
    "Act out an over dramatic soap opera scene for twenty seconds.",
    "Choose a random object near you and sell it to the group like a sales person.",
    "Do a slow motion fail scene like tripping in a cartoon for fifteen seconds.",
    "Pretend you are a robot with low battery for thirty seconds.",
    "Imitate three different animals in thirty seconds.",
    "Pretend you are an over excited fitness coach for thirty seconds.",
    "Act out a very serious news report about something totally silly in the room.",
    "Do a runway walk from one side of the room to the other with full model attitude.",
    "Tell the group about a recent small fail or awkward moment you had.",
    "Share the most embarrassing but safe thing you did in school.",
    "Tell the group your cringiest old social media post that you remember.",
    "Try to roast yourself for fifteen seconds in a playful way.",
    "Tell a story when you arrived very late and what happened.",
    "Share a funny lie you once told to avoid something small.",
    "Admit one silly habit you know you have.",
    "Describe your most chaotic morning in detail.",
    "Tell the group about a time you were completely confused.",
    "Share a time when you laughed in a serious moment and could not stop.",
    "Let the group decide a harmless pose for you and hold it for ten seconds.",
    "Let another player choose a song and you must hum it until someone guesses it.",
    "Let one person rearrange your hair or hat in a funny way for one round.",
    "Stand up and do ten very dramatic slow jumping jacks.",
    "Spin around in place ten times and then walk in a straight line.",
    "Let the group ask you three quick questions where you must answer in three words only.",
    "Let everyone vote and pick one person you must follow like a shadow for thirty seconds.",
    "Swap seats with someone the group chooses and say one nice thing about them.",
    "Let another player choose a famous character and you must act like them for one round.",
    "Close your eyes, point at someone randomly, then give them a compliment in a funny voice.",
];

/// Offered when the polarity's pool has run dry. Never part of any pool.
pub const FALLBACK_TASKS: [&str; 2] = ["Share something nice with the group.", "Do a funny pose."];

/// Render an attribute phrase as a voting prompt
pub fn question_text(attribute: &str) -> String {
    format!("Who is the most {}?", attribute)
}
