//! Built-in joke texts, grouped by language and category.

use jokebot_domain::{Category, Language};

/// Jokes for one language. An empty `chuck` list means the language has no
/// Chuck Norris jokes at all.
pub struct LanguageJokes {
    pub neutral: &'static [&'static str],
    pub chuck: &'static [&'static str],
}

impl LanguageJokes {
    /// Lists that make up `category` in this language; empty when unsupported
    pub fn lists(&self, category: Category) -> Vec<&'static [&'static str]> {
        let lists = match category {
            Category::Neutral => vec![self.neutral],
            Category::Chuck => vec![self.chuck],
            Category::All => vec![self.neutral, self.chuck],
        };
        lists.into_iter().filter(|l| !l.is_empty()).collect()
    }
}

const EN: LanguageJokes = LanguageJokes {
    neutral: &[
        "Why do programmers confuse Halloween with Christmas? Because OCT 31 == DEC 25.",
        "There are 10 kinds of people: those who understand binary and those who don't.",
        "A SQL query walks into a bar, goes up to two tables and asks: 'Can I join you?'",
        "Debugging is like being the detective in a crime movie where you are also the murderer.",
        "I would tell you a UDP joke, but you might not get it.",
        "Why did the developer go broke? Because he used up all his cache.",
        "Software and cathedrals are much the same: first we build them, then we pray.",
        "What is a programmer's favourite hangout place? Foo Bar.",
    ],
    chuck: &[
        "Chuck Norris can compile syntax errors.",
        "Chuck Norris doesn't need garbage collection. He doesn't call .Dispose(), he calls .DropKick().",
        "Chuck Norris writes code that optimizes itself.",
        "When Chuck Norris throws an exception, it goes across the room.",
        "Chuck Norris can divide by zero.",
        "All arrays Chuck Norris declares are of infinite size, because Chuck Norris knows no bounds.",
    ],
};

const DE: LanguageJokes = LanguageJokes {
    neutral: &[
        "Warum verwechseln Programmierer Halloween mit Weihnachten? Weil OCT 31 gleich DEC 25 ist.",
        "Es gibt 10 Arten von Menschen: die, die Binär verstehen, und die, die es nicht tun.",
        "Ein Programmierer geht einkaufen. Seine Frau sagt: Hol ein Brot, und wenn es Eier gibt, bring sechs. Er kommt mit sechs Broten zurück.",
    ],
    chuck: &[],
};

const ES: LanguageJokes = LanguageJokes {
    neutral: &[
        "¿Por qué los programadores confunden Halloween con Navidad? Porque OCT 31 == DEC 25.",
        "Hay 10 tipos de personas: las que entienden binario y las que no.",
        "¿Cuántos programadores hacen falta para cambiar una bombilla? Ninguno, es un problema de hardware.",
    ],
    chuck: &[
        "Chuck Norris puede compilar errores de sintaxis.",
        "Chuck Norris puede dividir entre cero.",
        "Chuck Norris no hace pruebas: el código no se atreve a fallar.",
    ],
};

const GL: LanguageJokes = LanguageJokes {
    neutral: &[
        "Por que os programadores confunden o Samaín co Nadal? Porque OCT 31 é igual a DEC 25.",
        "Hai 10 tipos de persoas: as que entenden o binario e as que non.",
    ],
    chuck: &[],
};

const EU: LanguageJokes = LanguageJokes {
    neutral: &[
        "Zergatik ez zaie programatzaileei natura gustatzen? Akats gehiegi daudelako.",
        "10 pertsona mota daude: bitarra ulertzen dutenak eta ulertzen ez dutenak.",
    ],
    chuck: &[],
};

const IT: LanguageJokes = LanguageJokes {
    neutral: &[
        "Perché i programmatori confondono Halloween con Natale? Perché OCT 31 è uguale a DEC 25.",
        "Ci sono 10 tipi di persone: quelle che capiscono il binario e quelle che no.",
        "Quanti programmatori servono per cambiare una lampadina? Nessuno, è un problema hardware.",
    ],
    chuck: &[],
};

/// Jokes available for `language`
pub fn for_language(language: Language) -> &'static LanguageJokes {
    match language {
        Language::En => &EN,
        Language::De => &DE,
        Language::Es => &ES,
        Language::Gl => &GL,
        Language::Eu => &EU,
        Language::It => &IT,
    }
}
