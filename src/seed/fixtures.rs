//! The demo dataset: ten users, each with ten recurring tasks.

use crate::models::RecurrencePeriod;

pub struct SeedUser {
    pub username: &'static str,
    pub email: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub tasks: [SeedTask; 10],
}

pub struct SeedTask {
    pub title: &'static str,
    pub description: &'static str,
    pub period: RecurrencePeriod,
    pub target: u32,
    pub duration: u32,
    pub tags: &'static str,
}

pub const USERS: [SeedUser; 10] = [
    SeedUser {
        username: "john_doe",
        email: "john@example.com",
        first_name: "John",
        last_name: "Doe",
        tasks: [
            SeedTask {
                title: "Morning stretching routine",
                description: "Start each day with 10 minutes of stretching to improve flexibility.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 10,
                tags: "fitness, morning, flexibility",
            },
            SeedTask {
                title: "Track daily calories intake",
                description: "Log all meals in MyFitnessPal to maintain awareness of nutrition.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 5,
                tags: "nutrition, tracking, health",
            },
            SeedTask {
                title: "Drink protein shake after workout",
                description: "Consume 30g protein within 30 minutes post-exercise for muscle recovery.",
                period: RecurrencePeriod::Weekly,
                target: 4,
                duration: 5,
                tags: "nutrition, protein, recovery",
            },
            SeedTask {
                title: "Complete strength training session",
                description: "Full body workout focusing on compound movements: squats, deadlifts, bench press.",
                period: RecurrencePeriod::Weekly,
                target: 3,
                duration: 60,
                tags: "strength, gym, workout",
            },
            SeedTask {
                title: "Run 5K without stopping",
                description: "Build cardiovascular endurance by running 5 kilometers continuously.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 30,
                tags: "running, cardio, endurance",
            },
            SeedTask {
                title: "Try a new healthy recipe",
                description: "Experiment with nutritious cooking - focus on high protein, low processed foods.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 45,
                tags: "cooking, nutrition, health",
            },
            SeedTask {
                title: "Achieve 10,000 steps daily",
                description: "Stay active throughout the day by walking more and taking stairs.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 60,
                tags: "walking, activity, health",
            },
            SeedTask {
                title: "Master a new exercise form",
                description: "Learn proper technique for Olympic lifts or advanced calisthenics moves.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 30,
                tags: "technique, learning, fitness",
            },
            SeedTask {
                title: "Complete a fitness challenge",
                description: "30-day challenge: 100 pushups, 100 squats, 100 situps daily.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 45,
                tags: "challenge, discipline, strength",
            },
            SeedTask {
                title: "Train for half-marathon",
                description: "Follow a structured 12-week training plan to run 21.1km.",
                period: RecurrencePeriod::Weekly,
                target: 4,
                duration: 90,
                tags: "marathon, running, ambitious",
            },
        ],
    },
    SeedUser {
        username: "jane_smith",
        email: "jane@example.com",
        first_name: "Jane",
        last_name: "Smith",
        tasks: [
            SeedTask {
                title: "Review tech news and updates",
                description: "Spend 10 minutes reading Hacker News or TechCrunch to stay informed.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 10,
                tags: "tech, news, learning",
            },
            SeedTask {
                title: "Practice typing speed",
                description: "Use keybr.com or typing.com to improve typing to 80+ WPM.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 10,
                tags: "typing, productivity, skill",
            },
            SeedTask {
                title: "Solve one coding challenge",
                description: "Complete a LeetCode or HackerRank problem to sharpen algorithms.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 30,
                tags: "coding, algorithms, practice",
            },
            SeedTask {
                title: "Contribute to open source",
                description: "Submit a PR or fix a bug in an open source project on GitHub.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 60,
                tags: "opensource, github, community",
            },
            SeedTask {
                title: "Learn a new programming concept",
                description: "Study design patterns, system design, or new language features.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 45,
                tags: "learning, programming, concepts",
            },
            SeedTask {
                title: "Build a personal project feature",
                description: "Add functionality to your portfolio project or side hustle app.",
                period: RecurrencePeriod::Weekly,
                target: 3,
                duration: 90,
                tags: "project, coding, portfolio",
            },
            SeedTask {
                title: "Write a technical blog post",
                description: "Share knowledge by writing about a problem you solved or technology you learned.",
                period: RecurrencePeriod::Monthly,
                target: 2,
                duration: 120,
                tags: "writing, blog, teaching",
            },
            SeedTask {
                title: "Complete AWS certification module",
                description: "Study for AWS Solutions Architect or similar cloud certification.",
                period: RecurrencePeriod::Weekly,
                target: 3,
                duration: 60,
                tags: "aws, certification, cloud",
            },
            SeedTask {
                title: "Mentor a junior developer",
                description: "Schedule pair programming or code review sessions with less experienced colleagues.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 60,
                tags: "mentoring, leadership, teaching",
            },
            SeedTask {
                title: "Build and deploy a SaaS product",
                description: "Create a complete product from idea to production with paying customers.",
                period: RecurrencePeriod::Weekly,
                target: 5,
                duration: 120,
                tags: "saas, entrepreneurship, ambitious",
            },
        ],
    },
    SeedUser {
        username: "mike_wilson",
        email: "mike@example.com",
        first_name: "Mike",
        last_name: "Wilson",
        tasks: [
            SeedTask {
                title: "Review flashcards on Anki",
                description: "Spend 10 minutes reviewing vocabulary flashcards using spaced repetition.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 10,
                tags: "vocabulary, anki, memory",
            },
            SeedTask {
                title: "Listen to a podcast in target language",
                description: "Immerse yourself by listening to native content during commute or exercise.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 20,
                tags: "listening, podcast, immersion",
            },
            SeedTask {
                title: "Complete Duolingo daily goal",
                description: "Maintain your streak by completing at least one lesson.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 15,
                tags: "duolingo, practice, streak",
            },
            SeedTask {
                title: "Watch a movie without subtitles",
                description: "Challenge your comprehension by watching foreign films without English subtitles.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 120,
                tags: "movies, listening, comprehension",
            },
            SeedTask {
                title: "Practice speaking with language partner",
                description: "Use iTalki or Tandem to have a 30-minute conversation with a native speaker.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 30,
                tags: "speaking, conversation, practice",
            },
            SeedTask {
                title: "Read a book chapter in target language",
                description: "Improve reading comprehension by tackling native literature.",
                period: RecurrencePeriod::Weekly,
                target: 3,
                duration: 45,
                tags: "reading, books, comprehension",
            },
            SeedTask {
                title: "Write a journal entry in target language",
                description: "Practice writing by describing your day or thoughts in the language you're learning.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 15,
                tags: "writing, journal, practice",
            },
            SeedTask {
                title: "Learn 20 new vocabulary words",
                description: "Expand your vocabulary systematically with context and example sentences.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 30,
                tags: "vocabulary, learning, words",
            },
            SeedTask {
                title: "Take an online language class",
                description: "Enroll in structured lessons with a professional teacher for grammar and conversation.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 60,
                tags: "class, teacher, structured",
            },
            SeedTask {
                title: "Achieve B2 certification level",
                description: "Prepare for and pass an official language proficiency exam (DELF, JLPT, HSK, etc.).",
                period: RecurrencePeriod::Weekly,
                target: 5,
                duration: 90,
                tags: "certification, exam, fluency",
            },
        ],
    },
    SeedUser {
        username: "sarah_jones",
        email: "sarah@example.com",
        first_name: "Sarah",
        last_name: "Jones",
        tasks: [
            SeedTask {
                title: "Practice deep breathing exercises",
                description: "Take 5 minutes for box breathing or 4-7-8 technique to reduce stress.",
                period: RecurrencePeriod::Daily,
                target: 2,
                duration: 5,
                tags: "breathing, relaxation, stress",
            },
            SeedTask {
                title: "Write three gratitude items",
                description: "Before bed, write down three things you're grateful for today.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 5,
                tags: "gratitude, journaling, positivity",
            },
            SeedTask {
                title: "Morning meditation session",
                description: "Start the day with guided meditation using Headspace or Calm app.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 15,
                tags: "meditation, morning, mindfulness",
            },
            SeedTask {
                title: "Digital detox hour",
                description: "Spend one hour without any screens - read, walk, or simply be present.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 60,
                tags: "detox, screens, presence",
            },
            SeedTask {
                title: "Practice yoga or tai chi",
                description: "Combine physical movement with mindfulness through gentle exercise.",
                period: RecurrencePeriod::Weekly,
                target: 3,
                duration: 45,
                tags: "yoga, movement, mindfulness",
            },
            SeedTask {
                title: "Journal about emotions and thoughts",
                description: "Free-write about your feelings to process and understand them better.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 20,
                tags: "journaling, emotions, reflection",
            },
            SeedTask {
                title: "Spend quality time in nature",
                description: "Go for a mindful walk in a park, forest, or near water.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 60,
                tags: "nature, walking, peace",
            },
            SeedTask {
                title: "Read a self-help or psychology book",
                description: "Learn about mental health, habits, or personal growth from experts.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 30,
                tags: "reading, psychology, growth",
            },
            SeedTask {
                title: "Attend a therapy or coaching session",
                description: "Work with a professional to address challenges and set goals.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 60,
                tags: "therapy, coaching, professional",
            },
            SeedTask {
                title: "Complete a 30-day meditation challenge",
                description: "Build a solid meditation practice by committing to 30 consecutive days.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 20,
                tags: "challenge, meditation, habit",
            },
        ],
    },
    SeedUser {
        username: "david_brown",
        email: "david@example.com",
        first_name: "David",
        last_name: "Brown",
        tasks: [
            SeedTask {
                title: "Daily sketch practice",
                description: "Draw anything for 15 minutes - people, objects, or abstract shapes.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 15,
                tags: "drawing, sketch, practice",
            },
            SeedTask {
                title: "Explore a new art technique",
                description: "Watch a tutorial and try watercolors, charcoal, or digital art.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 30,
                tags: "technique, learning, experimentation",
            },
            SeedTask {
                title: "Take reference photos",
                description: "Photograph interesting subjects, textures, and compositions for future artwork.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 30,
                tags: "photography, reference, inspiration",
            },
            SeedTask {
                title: "Study art from masters",
                description: "Analyze works by famous artists - understand composition, color, and technique.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 45,
                tags: "study, masters, analysis",
            },
            SeedTask {
                title: "Work on a larger art piece",
                description: "Dedicate focused time to a more ambitious artwork that takes multiple sessions.",
                period: RecurrencePeriod::Weekly,
                target: 3,
                duration: 90,
                tags: "artwork, project, creation",
            },
            SeedTask {
                title: "Share art on social media",
                description: "Post your work on Instagram or ArtStation to build an audience and get feedback.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 15,
                tags: "social, sharing, community",
            },
            SeedTask {
                title: "Participate in an art challenge",
                description: "Join Inktober, Draw This In Your Style, or similar community challenges.",
                period: RecurrencePeriod::Weekly,
                target: 3,
                duration: 60,
                tags: "challenge, community, practice",
            },
            SeedTask {
                title: "Create art for a client or commission",
                description: "Take on paid work to build portfolio and earn from your skills.",
                period: RecurrencePeriod::Monthly,
                target: 1,
                duration: 180,
                tags: "commission, client, professional",
            },
            SeedTask {
                title: "Attend a life drawing session",
                description: "Practice figure drawing with live models to improve human anatomy skills.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 120,
                tags: "figure, anatomy, live",
            },
            SeedTask {
                title: "Prepare portfolio for gallery submission",
                description: "Curate your best work for exhibition opportunities or art school applications.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 60,
                tags: "portfolio, gallery, ambitious",
            },
        ],
    },
    SeedUser {
        username: "emily_davis",
        email: "emily@example.com",
        first_name: "Emily",
        last_name: "Davis",
        tasks: [
            SeedTask {
                title: "Track daily expenses",
                description: "Log every purchase in a budgeting app like YNAB or Mint.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 5,
                tags: "budget, tracking, expenses",
            },
            SeedTask {
                title: "Review financial news",
                description: "Stay informed about markets and economy with Bloomberg or WSJ.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 10,
                tags: "news, markets, finance",
            },
            SeedTask {
                title: "Transfer to savings account",
                description: "Automate weekly savings by moving money to a high-yield savings account.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 5,
                tags: "savings, automation, wealth",
            },
            SeedTask {
                title: "Review and categorize spending",
                description: "Analyze where your money goes and identify areas to cut back.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 30,
                tags: "budget, analysis, spending",
            },
            SeedTask {
                title: "Research investment opportunities",
                description: "Study stocks, ETFs, or real estate options for growing wealth.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 45,
                tags: "investing, research, stocks",
            },
            SeedTask {
                title: "Read a personal finance book",
                description: "Learn from experts like Ramit Sethi, Dave Ramsey, or Morgan Housel.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 30,
                tags: "reading, finance, education",
            },
            SeedTask {
                title: "Rebalance investment portfolio",
                description: "Review asset allocation and adjust to maintain your target risk level.",
                period: RecurrencePeriod::Monthly,
                target: 1,
                duration: 60,
                tags: "portfolio, investing, rebalance",
            },
            SeedTask {
                title: "Negotiate a bill or subscription",
                description: "Call service providers to reduce rates or cancel unused subscriptions.",
                period: RecurrencePeriod::Monthly,
                target: 2,
                duration: 30,
                tags: "negotiation, savings, bills",
            },
            SeedTask {
                title: "Create additional income stream",
                description: "Start a side hustle, freelancing, or passive income project.",
                period: RecurrencePeriod::Weekly,
                target: 3,
                duration: 120,
                tags: "income, side-hustle, entrepreneurship",
            },
            SeedTask {
                title: "Plan for financial independence",
                description: "Calculate FIRE number and create a long-term wealth building strategy.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 60,
                tags: "fire, independence, planning",
            },
        ],
    },
    SeedUser {
        username: "chris_miller",
        email: "chris@example.com",
        first_name: "Chris",
        last_name: "Miller",
        tasks: [
            SeedTask {
                title: "Organize inbox and respond to emails",
                description: "Achieve inbox zero by processing and responding to all important emails.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 20,
                tags: "email, organization, productivity",
            },
            SeedTask {
                title: "Plan tomorrow's priorities",
                description: "End each workday by listing top 3 tasks for the next day.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 10,
                tags: "planning, priorities, productivity",
            },
            SeedTask {
                title: "Update LinkedIn profile",
                description: "Keep your professional profile current with recent achievements and skills.",
                period: RecurrencePeriod::Monthly,
                target: 1,
                duration: 30,
                tags: "linkedin, profile, networking",
            },
            SeedTask {
                title: "Connect with a colleague",
                description: "Build relationships by having coffee or a virtual chat with coworkers.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 30,
                tags: "networking, relationships, colleagues",
            },
            SeedTask {
                title: "Attend industry webinar or event",
                description: "Stay current by participating in professional development events.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 60,
                tags: "webinar, industry, learning",
            },
            SeedTask {
                title: "Document accomplishments for review",
                description: "Keep a brag document of your wins and contributions.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 15,
                tags: "accomplishments, review, career",
            },
            SeedTask {
                title: "Practice public speaking",
                description: "Join Toastmasters or practice presentations to improve communication.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 60,
                tags: "speaking, presentation, communication",
            },
            SeedTask {
                title: "Seek feedback from manager",
                description: "Schedule regular 1:1s to discuss performance and growth areas.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 30,
                tags: "feedback, manager, growth",
            },
            SeedTask {
                title: "Apply for stretch assignments",
                description: "Volunteer for challenging projects that expand your skills and visibility.",
                period: RecurrencePeriod::Monthly,
                target: 1,
                duration: 60,
                tags: "growth, projects, visibility",
            },
            SeedTask {
                title: "Prepare for promotion conversation",
                description: "Build your case with evidence and schedule a career discussion with leadership.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 60,
                tags: "promotion, career, ambitious",
            },
        ],
    },
    SeedUser {
        username: "amanda_taylor",
        email: "amanda@example.com",
        first_name: "Amanda",
        last_name: "Taylor",
        tasks: [
            SeedTask {
                title: "Warm up voice or instrument",
                description: "Start practice with scales, arpeggios, or vocal exercises.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 15,
                tags: "warmup, practice, technique",
            },
            SeedTask {
                title: "Listen to new music for inspiration",
                description: "Discover new artists and genres to expand your musical horizons.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 20,
                tags: "listening, inspiration, discovery",
            },
            SeedTask {
                title: "Practice current repertoire",
                description: "Work on pieces you're learning with focus on difficult passages.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 45,
                tags: "practice, repertoire, improvement",
            },
            SeedTask {
                title: "Learn a new song or piece",
                description: "Expand your repertoire by tackling something new each week.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 60,
                tags: "learning, songs, repertoire",
            },
            SeedTask {
                title: "Study music theory",
                description: "Understand chord progressions, scales, and composition techniques.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 30,
                tags: "theory, learning, musicianship",
            },
            SeedTask {
                title: "Record and review your playing",
                description: "Record yourself to identify areas for improvement objectively.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 30,
                tags: "recording, review, improvement",
            },
            SeedTask {
                title: "Jam with other musicians",
                description: "Play with others to improve timing, listening, and collaborative skills.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 90,
                tags: "jamming, collaboration, social",
            },
            SeedTask {
                title: "Write an original song or composition",
                description: "Express yourself by creating your own music.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 60,
                tags: "songwriting, composition, creativity",
            },
            SeedTask {
                title: "Perform at open mic or local venue",
                description: "Get stage experience and overcome performance anxiety.",
                period: RecurrencePeriod::Monthly,
                target: 2,
                duration: 120,
                tags: "performance, stage, experience",
            },
            SeedTask {
                title: "Prepare for audition or competition",
                description: "Polish your best pieces for a high-stakes performance opportunity.",
                period: RecurrencePeriod::Weekly,
                target: 5,
                duration: 90,
                tags: "audition, competition, ambitious",
            },
        ],
    },
    SeedUser {
        username: "robert_anderson",
        email: "robert@example.com",
        first_name: "Robert",
        last_name: "Anderson",
        tasks: [
            SeedTask {
                title: "Send a thoughtful message to a friend",
                description: "Reach out to someone you haven't talked to in a while.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 5,
                tags: "friendship, communication, connection",
            },
            SeedTask {
                title: "Practice active listening",
                description: "In conversations, focus fully on the other person without planning your response.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 15,
                tags: "listening, communication, presence",
            },
            SeedTask {
                title: "Have a phone call with family",
                description: "Stay connected with parents, siblings, or relatives through regular calls.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 30,
                tags: "family, connection, relationships",
            },
            SeedTask {
                title: "Plan a social activity",
                description: "Organize dinner, game night, or outing with friends.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 30,
                tags: "social, planning, friends",
            },
            SeedTask {
                title: "Meet someone new",
                description: "Attend a meetup, class, or event to expand your social circle.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 90,
                tags: "networking, meetup, new-people",
            },
            SeedTask {
                title: "Practice a random act of kindness",
                description: "Do something nice for a stranger or acquaintance without expecting anything back.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 15,
                tags: "kindness, generosity, community",
            },
            SeedTask {
                title: "Have a deep conversation",
                description: "Go beyond small talk - discuss dreams, fears, and meaningful topics.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 60,
                tags: "conversation, depth, connection",
            },
            SeedTask {
                title: "Resolve a conflict or apologize",
                description: "Address any tension in relationships with honesty and empathy.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 30,
                tags: "conflict, resolution, growth",
            },
            SeedTask {
                title: "Volunteer for a cause",
                description: "Give your time to help others through a charity or community organization.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 180,
                tags: "volunteering, community, giving",
            },
            SeedTask {
                title: "Host a gathering or party",
                description: "Bring people together by organizing a memorable event at your home.",
                period: RecurrencePeriod::Monthly,
                target: 1,
                duration: 240,
                tags: "hosting, party, social",
            },
        ],
    },
    SeedUser {
        username: "lisa_thomas",
        email: "lisa@example.com",
        first_name: "Lisa",
        last_name: "Thomas",
        tasks: [
            SeedTask {
                title: "Review key business metrics",
                description: "Check dashboard for revenue, users, or other KPIs daily.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 10,
                tags: "metrics, analytics, business",
            },
            SeedTask {
                title: "Respond to customer inquiries",
                description: "Provide excellent support by addressing customer questions promptly.",
                period: RecurrencePeriod::Daily,
                target: 1,
                duration: 30,
                tags: "customer, support, service",
            },
            SeedTask {
                title: "Create content for social media",
                description: "Build brand presence with valuable posts on LinkedIn, Twitter, or Instagram.",
                period: RecurrencePeriod::Weekly,
                target: 3,
                duration: 30,
                tags: "content, social-media, marketing",
            },
            SeedTask {
                title: "Network with other entrepreneurs",
                description: "Attend startup events or schedule calls with fellow founders.",
                period: RecurrencePeriod::Weekly,
                target: 2,
                duration: 60,
                tags: "networking, founders, community",
            },
            SeedTask {
                title: "Work on product improvements",
                description: "Based on user feedback, enhance your product or service.",
                period: RecurrencePeriod::Weekly,
                target: 3,
                duration: 120,
                tags: "product, improvement, development",
            },
            SeedTask {
                title: "Study competitors and market",
                description: "Analyze what competitors are doing and identify market opportunities.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 60,
                tags: "research, competitors, market",
            },
            SeedTask {
                title: "Reach out to potential customers",
                description: "Cold outreach to leads through email, LinkedIn, or calls.",
                period: RecurrencePeriod::Weekly,
                target: 5,
                duration: 60,
                tags: "sales, outreach, growth",
            },
            SeedTask {
                title: "Write and send newsletter",
                description: "Keep your audience engaged with valuable email content.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 60,
                tags: "newsletter, email, marketing",
            },
            SeedTask {
                title: "Pitch to investors or partners",
                description: "Present your business to potential investors or strategic partners.",
                period: RecurrencePeriod::Weekly,
                target: 1,
                duration: 90,
                tags: "pitch, investors, fundraising",
            },
            SeedTask {
                title: "Achieve monthly revenue target",
                description: "Focus on sales and retention to hit your MRR or revenue goals.",
                period: RecurrencePeriod::Weekly,
                target: 5,
                duration: 120,
                tags: "revenue, goals, ambitious",
            },
        ],
    },
];
