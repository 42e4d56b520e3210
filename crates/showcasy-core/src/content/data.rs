//! Built-in portfolio content

use chrono::NaiveDate;

use super::models::{
    ApproachStep, Award, BlogPost, CardSize, Client, Experience, Metric, Project, Skill,
    Testimonial,
};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            slug: "safe-space",
            title: "Safe Space",
            category: "UIUX",
            description: "A React Therapy Platform for Mental Health",
            image: "/images/TherapyMockup.png",
            featured: true,
            size: CardSize::Large,
            date: ymd(2026, 1, 25),
            client: "Jon Doe",
            services: &["Website Design", "UIUX", "React"],
            website: "https://agd3sign.github.io/React_Therapy/#home",
            about: "At Safe Space Therapy, the goal is to make mental wellness approachable, private, and consistent. The platform combines compassionate care with modern technology, allowing individuals to book sessions, track emotional patterns, and access guided resources in one secure space. Clients can schedule appointments, journal their thoughts, monitor mood trends, and set personal goals, all within a calm, distraction-free interface designed to reduce friction and encourage routine.",
            clients: "The platform was designed for people who want support but struggle with traditional barriers: time, stigma, uncertainty, or accessibility. Many users were balancing demanding work schedules, caregiving responsibilities, or anxiety around in-person visits. They needed a simple, reassuring environment where they could check in regularly, communicate comfortably, and see progress over time.",
            challenge: "Mental health platforms often overwhelm users with complex dashboards or clinical language. The challenge was to design an experience that felt calm rather than medical: structured without feeling rigid, supportive without feeling intrusive. The interface was intentionally simplified to guide users step-by-step, prioritizing emotional comfort over feature density.",
            results: None,
            metrics: &[
                Metric { value: "$22.8M", label: "Projected platform value in behavioral health market positioning" },
                Metric { value: "+24%", label: "Increase in session booking completion after UX redesign" },
                Metric { value: "~400K", label: "Monthly check-ins and mood logs recorded by users" },
            ],
            testimonial: None,
        },
        Project {
            slug: "wepay",
            title: "Wepay",
            category: "Branding",
            description: "A modern fintech payment solution with clean, user-friendly interface design.",
            image: "/images/project-wepay-phone.jpg",
            featured: true,
            size: CardSize::Medium,
            date: ymd(2023, 6, 12),
            client: "Sarah Chen",
            services: &["Branding", "Mobile App", "UIUX"],
            website: "#",
            about: "Wepay is a revolutionary fintech payment platform designed to streamline financial transactions for businesses of all sizes. Our comprehensive approach to design ensured both aesthetics and functionality.",
            clients: "Our clients needed a payment solution that was both secure and intuitive, allowing their users to manage transactions effortlessly while maintaining trust in the platform.",
            challenge: "The main challenge was creating a mobile-first experience that could handle complex financial data while maintaining a clean, approachable interface that users of all technical levels could navigate with ease.",
            results: Some("Through extensive user research and iterative design, we delivered a platform that significantly improved user engagement and transaction completion rates."),
            metrics: &[
                Metric { value: "$15.2M", label: "Processed in first quarter" },
                Metric { value: "+38%", label: "User retention improvement" },
                Metric { value: "~200K", label: "Active monthly users" },
            ],
            testimonial: Some(Testimonial {
                quote: "Brandon's professionalism, responsiveness, and dedication to delivering high-quality work have exceeded our expectations. He made invaluable contributions and would highly recommend him.",
                author: "Spencer Morgan",
                role: "Co-Founder",
                company: "django",
            }),
        },
        Project {
            slug: "payrole",
            title: "Payrole",
            category: "Mobile App",
            description: "A comprehensive payroll management system designed for modern businesses.",
            image: "/images/project-payrole-phone.jpg",
            featured: true,
            size: CardSize::Medium,
            date: ymd(2023, 8, 20),
            client: "Michael Rivera",
            services: &["Mobile App", "UIUX"],
            website: "#",
            about: "Payrole is a next-generation payroll management application that simplifies employee payment processing and tax calculations for small to medium businesses.",
            clients: "Small and medium business owners who needed a straightforward payroll solution that could scale with their growing teams.",
            challenge: "Designing an interface that could accommodate complex payroll calculations while keeping the experience simple and stress-free for business owners.",
            results: Some("We delivered a streamlined payroll experience that reduced processing time by 60% and eliminated common calculation errors."),
            metrics: &[
                Metric { value: "60%", label: "Reduction in processing time" },
                Metric { value: "+45%", label: "Increase in user satisfaction" },
                Metric { value: "~100K", label: "Businesses served globally" },
            ],
            testimonial: Some(Testimonial {
                quote: "Brandon is an exceptionally talented developer who consistently exceeded our expectations. His ability to blend creativity and functionality resulted in visually stunning designs.",
                author: "Rachel Krakow",
                role: "CEO of Pipefy",
                company: "pipefy",
            }),
        },
    ]
}

pub fn clients() -> Vec<Client> {
    vec![
        Client { name: "pipefy", label: "Pipefy.io", date: "May 5, 2023" },
        Client { name: "django", label: "Django", date: "May 5, 2023" },
        Client { name: "rackspace", label: "Rackspace", date: "May 5, 2023" },
        Client { name: "portal", label: "Portal", date: "May 5, 2023" },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "I had the pleasure of working with Brandon on a recent project, and I was blown away by his creativity and attention to detail. I highly recommend Brandon for anyone looking for a talented and professional developer.",
            author: "Richard Jones",
            role: "CEO at Teamwork",
            company: "teamwork.",
        },
        Testimonial {
            quote: "His professionalism, responsiveness, and dedication to delivering high-quality work have exceeded our expectations. He made invaluable contributions and would highly recommend him to anyone in need of a talented and reliable developer.",
            author: "Spencer Morgan",
            role: "Co-Founder",
            company: "django",
        },
        Testimonial {
            quote: "Brandon is an exceptionally talented developer who consistently exceeded our expectations. His ability to blend creativity and functionality resulted in visually stunning designs that perfectly captured our brand's essence.",
            author: "Rachel Krakow",
            role: "CEO of Pipefy",
            company: "pipefy",
        },
        Testimonial {
            quote: "Working with Brandon was a game-changer for our business. His keen eye for detail and deep understanding of user experience resulted in designs that not only looked great but also enhanced the overall usability of our product.",
            author: "Jacob McDany",
            role: "CEO of Rackspace",
            company: "rackspace",
        },
    ]
}

pub fn awards() -> Vec<Award> {
    vec![
        Award { title: "Honorable Mention", year: "2022", org: "AWWWARDS" },
        Award { title: "Site of The Day", year: "2022", org: "CSS Winners" },
        Award { title: "Best UI Design", year: "2023", org: "CSS Design Awards" },
        Award { title: "Site of The Day", year: "2023", org: "AWWWARDS" },
    ]
}

pub fn experience() -> Vec<Experience> {
    vec![
        Experience { period: "2013-2015", duration: "2 years", role: "as a Product Designer at Uber" },
        Experience { period: "2015-2018", duration: "3 years", role: "as a Lead of Product Designer at Spotify" },
        Experience { period: "2018-Now", duration: "5+ years", role: "as a Head of Product Designer at Rovio" },
    ]
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            title: "The Power of Typography in Visual Design: Enhancing Communication and Impact",
            date: "Feb 1, 2023",
            image: "/images/blog-typography.jpg",
        },
        BlogPost {
            title: "Designing for User Experience: Creating Intuitive and Engaging Interfaces",
            date: "April 5, 2023",
            image: "/images/blog-ux.jpg",
        },
    ]
}

pub fn approach_steps() -> Vec<ApproachStep> {
    vec![
        ApproachStep {
            number: "01",
            title: "Discovery Call",
            description: "We talk through your business, your customers and what success looks like before anything gets designed.",
            details: &["Goals and audience", "Scope and timeline", "Existing brand and content"],
        },
        ApproachStep {
            number: "02",
            title: "Plan & Wireframe",
            description: "A page map and low-fidelity wireframes so we agree on structure before spending time on polish.",
            details: &["Sitemap", "Wireframes for key pages", "Content checklist"],
        },
        ApproachStep {
            number: "03",
            title: "Design",
            description: "High-fidelity designs for every screen size, reviewed together and refined until they feel right.",
            details: &["Responsive mockups", "Two rounds of revisions", "Interactive prototype"],
        },
        ApproachStep {
            number: "04",
            title: "Build",
            description: "Clean, fast front-end code with regular previews so there are no surprises at launch.",
            details: &["Weekly preview links", "Accessibility basics", "Performance budget"],
        },
        ApproachStep {
            number: "05",
            title: "Launch & Support",
            description: "Going live, handing over, and sticking around to make sure everything keeps working.",
            details: &["Deployment", "Walkthrough session", "30 days of fixes"],
        },
    ]
}

pub fn skills() -> Vec<Skill> {
    vec![
        Skill { name: "React", glyph: "⚛" },
        Skill { name: "JavaScript", glyph: "JS" },
        Skill { name: "TypeScript", glyph: "TS" },
        Skill { name: "HTML/CSS", glyph: "<>" },
        Skill { name: "Tailwind CSS", glyph: "~" },
        Skill { name: "GSAP", glyph: "✦" },
        Skill { name: "Figma", glyph: "◐" },
        Skill { name: "Git", glyph: "⎇" },
        Skill { name: "GitHub", glyph: "◉" },
        Skill { name: "Docker", glyph: "▣" },
        Skill { name: "Obsidian", glyph: "◆" },
        Skill { name: "Cursor", glyph: "▸" },
        Skill { name: "Terminal", glyph: "$" },
        Skill { name: "SQL", glyph: "⛁" },
        Skill { name: "REST APIs", glyph: "⇄" },
        Skill { name: "Sass", glyph: "§" },
        Skill { name: "Framer Motion", glyph: "≋" },
        Skill { name: "Responsive Design", glyph: "▯" },
        Skill { name: "CI/CD", glyph: "↻" },
        Skill { name: "Chrome DevTools", glyph: "◎" },
    ]
}

/// Services offered on the contact form
pub const SERVICES: &[&str] = &[
    "Mobile App",
    "Website Design",
    "Branding",
    "Web Development",
    "Illustration",
    "Logo Design",
    "Graphic Design",
];

/// Budget choices on the contact form
pub const BUDGET_RANGES: &[&str] = &[
    "$1k - $5k",
    "$5k - $10k",
    "$10k - $20k",
    "$20k - $50k",
    ">$50k",
];
