use web_sys::window;
use yew::prelude::*;

use crate::controller;

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    section: AttrValue,
    translate: AttrValue,
    label: AttrValue,
    #[prop_or_default]
    active: bool,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    html! {
        <li>
            <a
                class={classes!("nav-link", props.active.then_some("active"))}
                href={format!("#{}", props.section)}
                data-section={props.section.clone()}
                data-translate={props.translate.clone()}
            >
                {props.label.clone()}
            </a>
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct StatItemProps {
    target: AttrValue,
    translate: AttrValue,
    label: AttrValue,
}

#[function_component(StatItem)]
fn stat_item(props: &StatItemProps) -> Html {
    html! {
        <div class="stat-item">
            <span class="stat-number" data-target={props.target.clone()}>{"0"}</span>
            <span class="stat-label" data-translate={props.translate.clone()}>{props.label.clone()}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    name: AttrValue,
    icon: AttrValue,
    width: AttrValue,
}

#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    html! {
        <div class="skill-card">
            <div class="skill-icon">{props.icon.clone()}</div>
            <div class="skill-info">
                <h3 class="skill-name">{props.name.clone()}</h3>
                <div class="skill-bar">
                    <div class="skill-progress" data-width={props.width.clone()}></div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    category: AttrValue,
    title: AttrValue,
    description: AttrValue,
    tags: Vec<AttrValue>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    html! {
        <div class="project-card" data-category={props.category.clone()}>
            <div class="project-content">
                <h3 class="project-title">{props.title.clone()}</h3>
                <p class="project-description">{props.description.clone()}</p>
                <div class="project-tags">
                    { for props.tags.iter().map(|tag| html! { <span class="project-tag">{tag.clone()}</span> }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ContactCardProps {
    icon: AttrValue,
    translate: AttrValue,
    label: AttrValue,
    value: AttrValue,
}

#[function_component(ContactCard)]
fn contact_card(props: &ContactCardProps) -> Html {
    html! {
        <div class="contact-card">
            <div class="contact-icon">{props.icon.clone()}</div>
            <h3 data-translate={props.translate.clone()}>{props.label.clone()}</h3>
            <p>{props.value.clone()}</p>
            <button class="contact-copy" type="button" data-translate="contact-copy">{"Copy"}</button>
        </div>
    }
}

fn code_window() -> Html {
    html! {
        <div class="code-window">
            <div class="window-header">
                <div class="window-controls">
                    <span class="control close"></span>
                    <span class="control minimize"></span>
                    <span class="control maximize"></span>
                </div>
                <div class="window-title">{"awsam-portfolio.js"}</div>
            </div>
            <div class="code-content">
                <div class="code-line">
                    <span class="line-number">{"1"}</span>
                    <span class="code-text">
                        <span class="keyword">{"const"}</span>
                        {" "}
                        <span class="variable">{"developer"}</span>
                        {" "}
                        <span class="operator">{"="}</span>
                        {" "}
                        <span class="string">{"'Awsam Raafat'"}</span><span class="semicolon">{";"}</span>
                    </span>
                </div>
                <div class="code-line">
                    <span class="line-number">{"2"}</span>
                    <span class="code-text">
                        <span class="keyword">{"const"}</span>
                        {" "}
                        <span class="variable">{"skills"}</span>
                        {" "}
                        <span class="operator">{"="}</span>
                        {" "}
                        <span class="bracket">{"["}</span>
                    </span>
                </div>
                <div class="code-line">
                    <span class="line-number">{"3"}</span>
                    <span class="code-text">
                        {"\u{a0}\u{a0}"}<span class="string">{"'HTML'"}</span><span class="comma">{","}</span>
                    </span>
                </div>
                <div class="code-line">
                    <span class="line-number">{"4"}</span>
                    <span class="code-text">
                        {"\u{a0}\u{a0}"}<span class="string">{"'CSS'"}</span><span class="comma">{","}</span>
                    </span>
                </div>
                <div class="code-line">
                    <span class="line-number">{"5"}</span>
                    <span class="code-text">
                        {"\u{a0}\u{a0}"}<span class="string">{"'JavaScript'"}</span><span class="comma">{","}</span>
                    </span>
                </div>
                <div class="code-line">
                    <span class="line-number">{"6"}</span>
                    <span class="code-text">
                        {"\u{a0}\u{a0}"}<span class="string">{"'Flutter'"}</span>
                    </span>
                </div>
                <div class="code-line">
                    <span class="line-number">{"7"}</span>
                    <span class="code-text">
                        <span class="bracket">{"]"}</span><span class="semicolon">{";"}</span>
                    </span>
                </div>
                <div class="code-line">
                    <span class="line-number">{"8"}</span>
                    <span class="code-text">
                        <span class="keyword">{"console"}</span><span class="dot">{"."}</span><span class="function">{"log"}</span><span class="bracket">{"("}</span><span class="string">{"'Hello World!'"}</span><span class="bracket">{")"}</span><span class="semicolon">{";"}</span>
                    </span>
                </div>
            </div>
        </div>
    }
}

fn terminal_window() -> Html {
    html! {
        <div class="terminal-window">
            <div class="terminal-header">
                <span class="terminal-title">{"awsam@devmaster:~$"}</span>
            </div>
            <div class="terminal-content">
                <div class="terminal-line">
                    <span class="prompt">{"awsam@devmaster:~$"}</span>
                    <span class="command">{" whoami"}</span>
                </div>
                <div class="terminal-line output">
                    {"Full Stack Developer | Flutter Developer | Problem Solver"}
                </div>
                <div class="terminal-line">
                    <span class="prompt">{"awsam@devmaster:~$"}</span>
                    <span class="command cursor-blink">{" _"}</span>
                </div>
            </div>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    use_effect_with((), move |_| {
        controller::mount();
        || ()
    });

    html! {
        <>
            <canvas id="matrix-canvas" class="matrix-canvas"></canvas>
            <div class="particles" aria-hidden="true">
                { for (0..6).map(|_| html! { <div class="particle"></div> }) }
            </div>

            <nav class="navbar">
                <div class="nav-logo">
                    <span class="logo-text">{"<AwsamRaafat />"}</span>
                </div>
                <ul class="nav-links">
                    <NavLink section="home" translate="nav-home" label="Home" active={true} />
                    <NavLink section="about" translate="nav-about" label="About" />
                    <NavLink section="skills" translate="nav-skills" label="Skills" />
                    <NavLink section="projects" translate="nav-projects" label="Projects" />
                    <NavLink section="contact" translate="nav-contact" label="Contact" />
                </ul>
                <button id="lang-toggle" class="lang-toggle" type="button">
                    <span class="lang-text">{"العربية"}</span>
                </button>
                <div class="nav-toggle">
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </nav>

            <main>
                <section id="home" class="section active">
                    <div class="hero-container">
                        <div class="hero-text">
                            <p class="greeting-text" data-translate="hero-greeting">{"Hello, I'm"}</p>
                            <h1 class="hero-name">
                                <span class="title-word" data-text="Awsam">{"Awsam"}</span>
                                {" "}
                                <span class="title-word" data-text="Raafat">{"Raafat"}</span>
                            </h1>
                            <h2 class="hero-title">
                                <span class="subtitle-text"></span>
                                <span class="cursor">{"|"}</span>
                            </h2>
                            <p class="hero-description" data-translate="hero-description">
                                {"I specialize in creating advanced web applications using cutting-edge technologies"}
                                <br />
                                {"Transforming ideas into stunning digital reality"}
                            </p>
                            <div class="hero-stats">
                                <StatItem target="50" translate="hero-projects" label="Projects Completed" />
                                <StatItem target="5" translate="hero-experience" label="Years Experience" />
                                <StatItem target="20" translate="hero-clients" label="Happy Clients" />
                            </div>
                            <div class="hero-buttons">
                                <a href="#projects" class="btn btn-primary" data-translate="hero-view-work">{"View My Work"}</a>
                                <a href="files/cv.pdf" class="btn btn-secondary" download="awsam-raafat-cv.pdf" data-translate="hero-download-cv">{"Download My CV"}</a>
                            </div>
                        </div>
                        <div class="hero-visual">
                            { code_window() }
                        </div>
                    </div>
                </section>

                <section id="about" class="section">
                    <div class="section-header">
                        <h2 data-translate="about-title">{"About Me"}</h2>
                        <p data-translate="about-subtitle">{"My passion for development and innovation"}</p>
                    </div>
                    <div class="about-container">
                        <div class="about-text">
                            <div class="text-block">
                                <h3 data-translate="about-welcome">{"Welcome to my digital world"}</h3>
                                <p data-translate="about-text">
                                    {"I'm a passionate web developer who creates exceptional digital experiences. \
                                      I started my programming journey 5 years ago, and since then I haven't stopped \
                                      learning and developing. I specialize in modern web technologies and love \
                                      transforming complex ideas into clean, elegant code."}
                                </p>
                            </div>
                            <div class="text-block">
                                <h3 data-translate="about-vision">{"My Vision"}</h3>
                                <p data-translate="about-vision-text">
                                    {"I believe that technology should serve humanity, and every project should solve \
                                      real problems and improve users' lives. My goal is to create fast, secure, and \
                                      scalable applications."}
                                </p>
                            </div>
                            <div class="text-block">
                                <h3 data-translate="about-tech">{"Favorite Technologies"}</h3>
                                <div class="tech-tags">
                                    { for ["JavaScript", "Flutter", "Node.js", "Firebase", "PostgreSQL"].iter().map(|tech| html! {
                                        <span class="tech-tag">{*tech}</span>
                                    }) }
                                </div>
                            </div>
                        </div>
                        <div class="about-visual">
                            { terminal_window() }
                        </div>
                    </div>
                </section>

                <section id="skills" class="section">
                    <div class="section-header">
                        <h2 data-translate="skills-title">{"Skills"}</h2>
                        <p data-translate="skills-subtitle">{"Technologies and tools I master"}</p>
                    </div>
                    <div class="skills-grid">
                        <SkillCard name="HTML & CSS" icon="🎨" width="95%" />
                        <SkillCard name="JavaScript" icon="⚡" width="90%" />
                        <SkillCard name="Flutter" icon="📱" width="85%" />
                        <SkillCard name="Dart" icon="🎯" width="85%" />
                        <SkillCard name="Node.js" icon="🚀" width="75%" />
                        <SkillCard name="Firebase" icon="🔥" width="80%" />
                        <SkillCard name="SQL" icon="🗄️" width="70%" />
                        <SkillCard name="Git" icon="🌿" width="85%" />
                    </div>
                </section>

                <section id="projects" class="section">
                    <div class="section-header">
                        <h2 data-translate="projects-title">{"Projects"}</h2>
                        <p data-translate="projects-subtitle">{"My featured projects and achievements"}</p>
                    </div>
                    <div class="project-filters">
                        <button class="filter-btn active" type="button" data-filter="all" data-translate="projects-all">{"All"}</button>
                        <button class="filter-btn" type="button" data-filter="web" data-translate="projects-web">{"Web Apps"}</button>
                        <button class="filter-btn" type="button" data-filter="mobile" data-translate="projects-mobile">{"Mobile Apps"}</button>
                        <button class="filter-btn" type="button" data-filter="ai" data-translate="projects-ai">{"AI/ML"}</button>
                    </div>
                    <div class="projects-grid">
                        <ProjectCard
                            category="web"
                            title="E-Commerce Platform"
                            description="Full storefront with cart, checkout and an admin dashboard."
                            tags={vec![AttrValue::from("JavaScript"), AttrValue::from("Node.js"), AttrValue::from("PostgreSQL")]}
                        />
                        <ProjectCard
                            category="mobile"
                            title="Delivery Tracker"
                            description="Cross-platform delivery app with live order tracking."
                            tags={vec![AttrValue::from("Flutter"), AttrValue::from("Firebase")]}
                        />
                        <ProjectCard
                            category="ai"
                            title="Support Chatbot"
                            description="Arabic/English assistant answering store questions."
                            tags={vec![AttrValue::from("Python"), AttrValue::from("NLP")]}
                        />
                        <ProjectCard
                            category="web"
                            title="Booking Dashboard"
                            description="Scheduling dashboard for a local clinic network."
                            tags={vec![AttrValue::from("JavaScript"), AttrValue::from("Firebase")]}
                        />
                        <ProjectCard
                            category="mobile"
                            title="Fitness Companion"
                            description="Workout planner with offline-first sync."
                            tags={vec![AttrValue::from("Flutter"), AttrValue::from("SQLite")]}
                        />
                    </div>
                </section>

                <section id="contact" class="section">
                    <div class="section-header">
                        <h2 data-translate="contact-title">{"Contact Me"}</h2>
                        <p data-translate="contact-subtitle">{"Let's start your next project together"}</p>
                    </div>
                    <div class="contact-container">
                        <div class="contact-cards">
                            <ContactCard icon="📧" translate="contact-email" label="Email" value="awsam.raafat@gmail.com" />
                            <ContactCard icon="📞" translate="contact-phone" label="Phone" value="+20 100 123 4567" />
                            <ContactCard icon="📍" translate="contact-location" label="Location" value="Cairo, Egypt" />
                        </div>
                        <div class="contact-form-wrapper">
                            <h3 data-translate="contact-form-title">{"Send me a message"}</h3>
                            <p data-translate="contact-form-subtitle">{"I'll get back to you as soon as possible"}</p>
                            <form id="contact-form" class="contact-form">
                                <div class="form-group">
                                    <label for="name" data-translate="contact-name">{"Name"}</label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        required={true}
                                        placeholder="Enter your name"
                                        data-translate-placeholder="contact-name-placeholder"
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="email" data-translate="contact-email">{"Email"}</label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        required={true}
                                        placeholder="Enter your email"
                                        data-translate-placeholder="contact-email-placeholder"
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="subject" data-translate="contact-subject">{"Subject"}</label>
                                    <input
                                        type="text"
                                        id="subject"
                                        name="subject"
                                        required={true}
                                        placeholder="Message subject"
                                        data-translate-placeholder="contact-subject-placeholder"
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="message" data-translate="contact-message">{"Message"}</label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        required={true}
                                        rows="6"
                                        placeholder="Write your message here..."
                                        data-translate-placeholder="contact-message-placeholder"
                                    ></textarea>
                                </div>
                                <input
                                    type="text"
                                    name="website"
                                    class="honeypot"
                                    tabindex="-1"
                                    autocomplete="off"
                                    aria-hidden="true"
                                />
                                <input type="hidden" name="time" />
                                <button type="submit" class="btn btn-primary submit-btn" data-translate="contact-send">
                                    {"Send Message"}
                                </button>
                            </form>
                        </div>
                    </div>
                </section>
            </main>

            <footer class="footer">
                <p>
                    <span>{"© 2025 Awsam Raafat. "}</span>
                    <span data-translate="footer-rights">{"All rights reserved."}</span>
                </p>
                <p>
                    <span data-translate="footer-made">{"Made with"}</span>
                    <span class="heart">{" ❤"}</span>
                </p>
            </footer>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
