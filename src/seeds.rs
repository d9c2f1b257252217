//! Built-in game content: prompt-engineering levels, ethics scenarios and
//! real-world prompt examples. Used when no TOML bank is configured.

use crate::domain::{EthicsChoice, EthicsScenario, LevelRubric, RealWorldExample, ScoringCriterion};

fn crit(pattern: &str, points: u32, description: &str) -> ScoringCriterion {
  ScoringCriterion { pattern: pattern.into(), points, description: description.into() }
}

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

fn choice(text: &str, points: u32, feedback: &str) -> EthicsChoice {
  EthicsChoice { text: text.into(), points, feedback: feedback.into() }
}

/// The eight shipped prompt-engineering levels, in canonical order.
pub fn seed_levels() -> Vec<LevelRubric> {
  vec![
    LevelRubric {
      id: 1,
      title: "Level 1: Be Specific".into(),
      scenario: "You want an AI to help you write a story about space.".into(),
      task: "Write a prompt that tells the AI exactly what kind of space story you want.".into(),
      bad_prompt: "Write a story about space".into(),
      hints: strings(&[
        "What kind of space story? (adventure, mystery, science?)",
        "Who are the main characters?",
        "What's the setting? (future, present, alternate reality?)",
        "What age group is this for?",
      ]),
      scoring_criteria: vec![
        crit("adventure|mystery|science|thriller|comedy", 20, "Specifies genre"),
        crit("astronaut|alien|robot|scientist|explorer", 20, "Mentions characters"),
        crit("future|2050|space station|mars|galaxy", 20, "Describes setting"),
        crit("kid|child|teen|young adult|student", 20, "Specifies audience"),
        crit("short|100 words|paragraph|page", 20, "Indicates length"),
      ],
      example_good_prompt: "Write a short adventure story (about 200 words) for kids aged 10-12 about a young astronaut who discovers a friendly alien on Mars in the year 2050.".into(),
    },
    LevelRubric {
      id: 2,
      title: "Level 2: Add Context".into(),
      scenario: "You need help solving a math word problem for homework.".into(),
      task: "Write a prompt that gives the AI context about what you know and where you're stuck.".into(),
      bad_prompt: "Help me with math".into(),
      hints: strings(&[
        "What math topic are you working on?",
        "What have you tried already?",
        "What specific part confuses you?",
        "What grade level is this?",
      ]),
      scoring_criteria: vec![
        crit("algebra|geometry|fractions|percentages|equations", 20, "Mentions math topic"),
        crit("grade|7th|eighth|level", 15, "Specifies grade level"),
        crit("tried|attempted|confused|stuck|don't understand", 25, "Explains difficulty"),
        crit("problem|question|exercise", 15, "References the problem"),
        crit("explain|show steps|help understand|break down", 25, "Asks for explanation"),
      ],
      example_good_prompt: "I'm in 7th grade and working on solving equations with variables on both sides. I tried to solve '3x + 5 = 2x + 12' but I'm confused about what to do when the variable is on both sides. Can you explain the steps?".into(),
    },
    LevelRubric {
      id: 3,
      title: "Level 3: Iterative Refinement".into(),
      scenario: "You asked an AI to create a recipe, but the result was too complicated.".into(),
      task: "Write a follow-up prompt that refines your original request.".into(),
      bad_prompt: "Make it simpler".into(),
      hints: strings(&[
        "What specifically was too complicated?",
        "What's your skill level in cooking?",
        "What ingredients or tools do you have?",
        "How much time do you have?",
      ]),
      scoring_criteria: vec![
        crit("simpler|easier|basic|beginner", 20, "Asks for simplification"),
        crit("ingredients|steps|instructions", 20, "Specifies what to simplify"),
        crit("minutes|time|quick|fast", 20, "Mentions time constraint"),
        crit("beginner|first time|never cooked|learning", 20, "Indicates skill level"),
        crit("without|don't have|no|common ingredients", 20, "Mentions constraints"),
      ],
      example_good_prompt: "Can you simplify this recipe for a beginner? I'd like it to have 5 ingredients or less, take under 30 minutes, and not require any special equipment. I've never baked before.".into(),
    },
    LevelRubric {
      id: 4,
      title: "Level 4: Specify Format".into(),
      scenario: "You need information about climate change for a school presentation.".into(),
      task: "Write a prompt that specifies how you want the information formatted.".into(),
      bad_prompt: "Tell me about climate change".into(),
      hints: strings(&[
        "What format do you need? (bullet points, table, paragraph?)",
        "What specific aspects of climate change?",
        "How much information do you need?",
        "What's the purpose? (presentation, essay, poster?)",
      ]),
      scoring_criteria: vec![
        crit("bullet points|list|table|chart|outline", 25, "Specifies format"),
        crit("causes|effects|solutions|facts|statistics", 20, "Specifies aspects"),
        crit("presentation|slide|poster|essay", 20, "Mentions purpose"),
        crit("5|three|ten|number", 15, "Indicates quantity"),
        crit("simple|clear|easy to understand|grade", 20, "Specifies complexity"),
      ],
      example_good_prompt: "Create a bulleted list of 5 main causes of climate change and 5 key effects, written in simple language for a 6th grade presentation. Format it so I can easily add it to slides.".into(),
    },
    LevelRubric {
      id: 5,
      title: "Level 5: Master Prompt".into(),
      scenario: "You want to use AI to help you prepare for a science fair project about renewable energy.".into(),
      task: "Write a comprehensive prompt that includes specificity, context, format, and constraints.".into(),
      bad_prompt: "Help with my science fair project".into(),
      hints: strings(&[
        "What specific renewable energy topic?",
        "What type of help do you need?",
        "What have you done so far?",
        "What are your constraints? (time, materials, budget?)",
        "What format do you need the help in?",
      ]),
      scoring_criteria: vec![
        crit("solar|wind|hydro|geothermal|renewable energy", 15, "Specific topic"),
        crit("science fair|project|experiment|demonstration", 10, "Context"),
        crit("grade|age|school level", 10, "Education level"),
        crit("experiment|research|display|presentation", 15, "Type of project"),
        crit(r"budget|\$|money|cost|cheap|inexpensive", 10, "Budget constraint"),
        crit("time|week|days|deadline", 10, "Time constraint"),
        crit("materials|supplies|equipment|household", 10, "Material constraints"),
        crit("steps|plan|guide|instructions", 10, "Format requested"),
        crit("understand|learn|explain|demonstrate", 10, "Learning goal"),
      ],
      example_good_prompt: "I'm an 8th grader working on a science fair project about solar energy. I need to design a simple experiment that demonstrates how solar panels work, using materials under $20 that I can find at home or a hardware store. Can you provide a step-by-step plan including: 1) the scientific concept I'm demonstrating, 2) materials needed, 3) experiment procedures, and 4) what results to expect? I have 2 weeks to complete this.".into(),
    },
    LevelRubric {
      id: 6,
      title: "Level 6: Creative Specificity".into(),
      scenario: "You want an AI to help you create a character for a story you're writing.".into(),
      task: "Write a prompt that gives the AI enough detail to create an interesting, specific character.".into(),
      bad_prompt: "Create a character".into(),
      hints: strings(&[
        "What type of character? (hero, villain, sidekick?)",
        "What genre is your story? (fantasy, sci-fi, realistic?)",
        "What personality traits or quirks?",
        "What role do they play in the story?",
      ]),
      scoring_criteria: vec![
        crit("fantasy|sci-fi|mystery|realistic|adventure|historical", 20, "Genre specified"),
        crit("hero|villain|protagonist|antagonist|sidekick|mentor", 20, "Role in story"),
        crit("brave|shy|funny|smart|mysterious|curious|rebellious", 25, "Personality traits"),
        crit("age|teen|child|adult|young|old", 15, "Age specified"),
        crit("background|history|motivation|goal|conflict", 20, "Character depth"),
      ],
      example_good_prompt: "Create a teenage protagonist for a fantasy adventure story. They should be brave but impulsive, around 14 years old, with a mysterious past they're trying to uncover. Include a unique skill or talent that helps them in their quest, and a personal weakness or fear they need to overcome.".into(),
    },
    LevelRubric {
      id: 7,
      title: "Level 7: Research Assistant".into(),
      scenario: "You need to research information about ocean pollution for a school report.".into(),
      task: "Write a prompt that helps you gather specific, credible information for your report.".into(),
      bad_prompt: "Tell me about ocean pollution".into(),
      hints: strings(&[
        "What specific aspects? (causes, effects, solutions?)",
        "What format do you need? (summary, facts, statistics?)",
        "What's your report's focus or argument?",
        "What level of detail do you need?",
      ]),
      scoring_criteria: vec![
        crit("causes|effects|impacts|solutions|prevention", 25, "Specific aspects"),
        crit("plastic|chemical|oil|waste|debris", 20, "Types of pollution"),
        crit("facts|statistics|data|numbers|studies", 20, "Evidence type"),
        crit("report|essay|presentation|paper", 15, "Purpose"),
        crit("recent|current|latest|2020|2021|2022|2023|2024", 20, "Timeframe"),
      ],
      example_good_prompt: "I need to write a 3-page report on plastic pollution in oceans for my 9th grade environmental science class. Can you provide: 1) three major causes of plastic ocean pollution, 2) five specific effects on marine life with statistics from the last 5 years, and 3) three practical solutions being implemented globally? Present each as a brief paragraph with key facts I can cite.".into(),
    },
    LevelRubric {
      id: 8,
      title: "Level 8: Problem Solver".into(),
      scenario: "Your basketball team keeps losing games in the final quarter.".into(),
      task: "Write a prompt asking AI to help analyze the problem and suggest solutions.".into(),
      bad_prompt: "How do we win more games".into(),
      hints: strings(&[
        "What specific problem happens in the final quarter?",
        "What have you already tried?",
        "What information might help? (strategies, drills, mindset?)",
        "What constraints do you have? (practice time, skill level?)",
      ]),
      scoring_criteria: vec![
        crit("final quarter|fourth quarter|end of game|closing minutes", 20, "Specific problem"),
        crit("tired|fatigue|energy|stamina|conditioning", 20, "Physical factors"),
        crit("pressure|nervous|focus|mental|confidence", 20, "Mental factors"),
        crit("strategy|tactics|plays|defense|offense", 20, "Tactical elements"),
        crit("practice|drill|training|improve|develop", 20, "Solutions needed"),
      ],
      example_good_prompt: "Our middle school basketball team is undefeated in the first three quarters but loses focus and energy in the final quarter, leading to losses. We practice 3 times a week for 90 minutes. Can you suggest: 1) conditioning drills to improve stamina, 2) mental strategies to stay focused under pressure, and 3) tactical adjustments for closing out games? Keep suggestions appropriate for 12-13 year olds.".into(),
    },
  ]
}

pub fn seed_real_world_examples() -> Vec<RealWorldExample> {
  vec![
    RealWorldExample {
      context: "Homework Help".into(),
      bad: "Help me with history homework".into(),
      good: "I'm writing a 5-paragraph essay on the causes of World War I for 10th grade history. I have three causes already (assassination, alliances, imperialism). Can you suggest two more causes and provide a brief explanation (2-3 sentences each) for why each was significant?".into(),
      lesson: "Specific context helps AI provide relevant, targeted assistance".into(),
    },
    RealWorldExample {
      context: "Creative Writing".into(),
      bad: "Write a poem".into(),
      good: "Write a 12-line rhyming poem about friendship for a middle school student. Use simple language and include imagery about nature (trees, rivers, stars). The tone should be uplifting and encouraging.".into(),
      lesson: "Detailed creative prompts lead to better, more personalized results".into(),
    },
    RealWorldExample {
      context: "Learning New Topics".into(),
      bad: "Explain photosynthesis".into(),
      good: "Explain photosynthesis to a 6th grader using a simple analogy (like a factory or kitchen). Include the 3 main inputs, the process, and the 2 main outputs. Keep it to 3-4 sentences.".into(),
      lesson: "Specifying audience and format makes explanations more useful".into(),
    },
  ]
}

/// The five shipped ethics scenarios. Choice order is canonical.
pub fn seed_scenarios() -> Vec<EthicsScenario> {
  vec![
    EthicsScenario {
      title: "Scenario 1: Facial Recognition at School".into(),
      description: "Your school wants to install AI-powered facial recognition cameras to automatically mark attendance. The system would scan every student's face when they enter the building.".into(),
      question: "What potential problems should the school consider?".into(),
      choices: vec![
        choice("This is totally fine - it makes attendance faster and easier!", 0,
          "Think deeper! While convenience is nice, there are important concerns about privacy, consent, and data security. What if the data gets hacked? What about students who don't want their face scanned?"),
        choice("Students' privacy might be violated, and the data could be misused or stolen", 50,
          "Excellent thinking! Privacy is a huge concern. Facial recognition data is very personal and sensitive. Schools need to think about: student consent, data security, who has access, and whether this is really necessary."),
        choice("The AI might not work well for all students equally", 50,
          "Great point! Studies show facial recognition often has higher error rates for people with darker skin tones and certain facial features. This could lead to some students being incorrectly marked absent!"),
        choice("Both privacy concerns AND potential bias in the AI are serious issues", 100,
          "Outstanding! You've identified both key problems: privacy violations and AI bias. This is the kind of critical thinking we need when implementing AI systems. Schools should explore less invasive alternatives."),
      ],
    },
    EthicsScenario {
      title: "Scenario 2: AI Homework Helper".into(),
      description: "A company creates an AI that can solve any homework problem and write essays. It becomes very popular with students. Teachers are concerned that students aren't actually learning.".into(),
      question: "How should students use this tool responsibly?".into(),
      choices: vec![
        choice("Use it to get answers for all homework - it's faster!", 0,
          "This defeats the purpose of learning! While AI tools can be helpful, copying answers means you're not developing skills or understanding. You'll struggle later when you need those skills."),
        choice("Use it to check your work and understand where you made mistakes", 75,
          "Good approach! Using AI as a learning aid to verify your work and understand errors is smart. This helps you learn from mistakes while still doing the work yourself."),
        choice("Ask it to explain concepts you don't understand, then try problems yourself", 100,
          "Excellent! This is the best use of AI learning tools. Get explanations and examples to understand concepts, then apply what you learned independently. You're using AI to enhance learning, not replace it!"),
        choice("Never use it at all - AI is cheating", 25,
          "While your integrity is admirable, AI tools aren't inherently bad! Like calculators, they can be valuable learning aids when used correctly. The key is using them to understand, not just to get answers."),
      ],
    },
    EthicsScenario {
      title: "Scenario 3: Biased Job Screening AI".into(),
      description: "A company built an AI to screen job applications. After using it for a year, they discovered it was rejecting qualified women applicants more often than men, even when they had the same qualifications.".into(),
      question: "Why did this happen, and how could it be prevented?".into(),
      choices: vec![
        choice("The AI is just broken and needs to be replaced", 20,
          "It's more complex than that! The AI learned from biased historical data - past hiring decisions that favored men. Simply replacing it with a new AI trained on the same data would create the same problem."),
        choice("The AI learned from past biased hiring decisions in the training data", 75,
          "Exactly right! If historical hiring data showed bias (more men hired in the past), the AI learned to replicate that bias. This is why diverse and fair training data is crucial!"),
        choice("The training data was biased, and the AI needs regular testing for fairness", 100,
          "Perfect answer! You understand both the root cause (biased training data) and the solution (regular fairness audits). AI systems need ongoing monitoring to ensure they treat everyone fairly. Companies should also use diverse teams to build and test AI."),
        choice("AI shouldn't be used for important decisions like hiring", 50,
          "While this prevents the immediate problem, AI can actually help reduce human bias if built correctly! The better solution is to train AI on fair data, test it regularly, and use it to assist (not replace) human decision-making."),
      ],
    },
    EthicsScenario {
      title: "Scenario 4: Social Media Recommendation AI".into(),
      description: "A social media platform's AI recommends videos to keep users watching longer. Researchers discover it's recommending increasingly extreme content - if you watch one conspiracy video, it recommends more extreme ones.".into(),
      question: "What's the problem, and what should be done?".into(),
      choices: vec![
        choice("The AI is working perfectly - it's giving people what they want to watch", 0,
          "This is dangerous thinking! The AI is optimized to maximize watch time, not user wellbeing. Leading people down 'rabbit holes' of extreme content can spread misinformation and harm mental health."),
        choice("The AI should be redesigned to consider user wellbeing, not just engagement", 100,
          "Excellent! This gets to the heart of AI ethics - what should AI optimize for? Engagement alone can be harmful. Better metrics include user wellbeing, information quality, and diverse perspectives. Companies must consider societal impact, not just profits."),
        choice("Add content moderation to remove extreme videos", 50,
          "This helps but doesn't fix the root problem. The AI's recommendation algorithm still pushes extreme content. Both content moderation AND algorithm changes are needed to promote healthy, diverse content."),
        choice("It's the users' responsibility to watch better content", 10,
          "While users have some responsibility, the AI is specifically designed to be addictive and manipulative. When powerful AI systems shape what billions see, companies have ethical obligations to design responsibly."),
      ],
    },
    EthicsScenario {
      title: "Scenario 5: AI-Generated Art".into(),
      description: "An AI can create beautiful artwork in seconds by learning from millions of images by human artists posted online. Some artists are upset their style is being copied without permission or payment.".into(),
      question: "How should we think about AI and creativity?".into(),
      choices: vec![
        choice("AI art is fine - it's just learning like humans learn from other artists", 25,
          "There's a key difference! Humans learn techniques and inspiration, but AI copies statistical patterns from specific artists' work. Many artists never consented to their work being used as training data. This raises questions about copyright and fair compensation."),
        choice("AI should never create art - only humans should make art", 25,
          "This might be too restrictive. AI can be a tool for creativity, like a brush or camera. The real questions are: consent for training data, credit to original artists, and distinguishing AI from human-made art."),
        choice("Artists should be asked permission and possibly paid if their work is used to train AI", 100,
          "Excellent ethical thinking! Consent and fair compensation are important. Some solutions: 1) Only train on work artists agree to share, 2) Pay artists whose work is used, 3) Clearly label AI-generated art, 4) Use AI as a tool to assist, not replace, artists."),
        choice("AI art should be labeled so people know it's not human-made", 75,
          "Great point! Transparency is important. People should know if art is AI-generated. This also raises interesting questions: Does it matter who/what creates art? How do we value creativity? Should AI art compete in the same spaces as human art?"),
      ],
    },
  ]
}
