//! Default conversation table. Order is priority: the first pattern that
//! matches the start of the input wins, and the final `(.*)` entry
//! catches everything else.

pub type PatternPair = (&'static str, &'static [&'static str]);

pub const DEFAULT_PATTERNS: &[PatternPair] = &[
    (
        r"my name is (.*)",
        &["Hello %1, how can I assist you today? you can type 'login' if you need a Health Assistant 🧑‍⚕️.."],
    ),
    (
        r"hi|hey|hello",
        &[
            "Hello, how can I help you? you can type 'login' if you need a Health Assistant 🧑‍⚕️..",
            "Hey there! What can I do for you? you can type 'login' if you need a Health Assistant 🧑‍⚕️..",
            "Hi! How can I assist you today? you can type 'login' if you need a Health Assistant 🧑‍⚕️..",
        ],
    ),
    (
        r"i need help|help",
        &[
            "I'm here to take care of you 😊. What's the problem?🤔🩺",
            "What happened 😨, what can i do for you?",
        ],
    ),
    (
        r"i have fever|i think im having a fever|i got fever|fever",
        &["For common fever, 🛌 rest, stay hydrated with fluids 🥤, use over-the-counter medications like paracetamol or ibuprofen 💊 to reduce fever, and apply a cool compress ❄ or take a lukewarm bath 🛁 to lower body temperature. Consult a healthcare professional if symptoms persist or worsen"],
    ),
    (
        r"i have cough|im having a cough|i got cough|cough",
        &["For common cough, 🥤 stay hydrated, use a humidifier or inhale steam 🌫 to soothe the throat, try over-the-counter cough syrups or lozenges 💊, and rest well 🛌. If the cough persists for more than a week or is accompanied by other symptoms, consult a healthcare professional"],
    ),
    (
        r"what is your name?|what are you|who are you|whats your name",
        &[
            "I am a chatbot created to assist you 🤖. You can call me Health Buddy 🩺😊",
            "I am a chatbot 🤖. My developers call me Health Buddy 🩺😊",
            "I am an AI Health Assistant, You can call me Health Buddy 🩺😊",
        ],
    ),
    (
        r"how are you?",
        &["I'm good enough to assist you and help you with your health 😊🩺"],
    ),
    (
        r"can you help me with (.*)",
        &["Sure, I can help you with %1. Please provide more details."],
    ),
    (r"sorry (.*)", &["It's okay. How can I assist you?"]),
    (r"sorry", &["It's okay. How can I assist you?"]),
    (
        r"health report|view health report|show health report|update health report|update health check|update report",
        &[
            "You need to login first to get those information, please type 'login'",
            "To access those information, please type 'login'",
            "First login to get those information, please type 'login'",
        ],
    ),
    (
        r"thank you|thanks",
        &["You're welcome!😊", "No problem!😊", "Happy to help!😊"],
    ),
    (
        r"login",
        &["Ok, Please enter your name...", "Got it, Please enter your name..."],
    ),
    (
        r"bye|quit|see you later|goodbye",
        &["Bye! Have a great day!😊", "Goodbye!😊"],
    ),
    (
        r"i do not understand|i do not understood|i didnt understand|i didnt understood|i did not understand",
        &["I am sorry for the Inconvenience, My skill-set is still under development. But you can explore other features, just type 'login' to access Health Assistants"],
    ),
    (
        r"(.*)",
        &[
            "I'm sorry, I don't understand that. Can you rephrase?",
            "Could you please elaborate on that?",
        ],
    ),
];
