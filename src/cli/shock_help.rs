pub const SHOCK_TASK_HELPER: &'static str = "
                                General remarks \n
All quantities are given in cgs units: centimetres, grams, seconds, kelvin, erg. \n
A task file is a JSON object. Every field is optional; a missing field takes the value of \n
the reference run (molecular cloud accretion shock, 1e-13 g/cm3, 50 km/s, 20 K). \n

                                Upstream state \n
density: %float% - undisturbed gas density, g/cm3; \n
velocity: %float% - inflow velocity, cm/s. Must exceed the sound speed (Mach > 1); \n
temperature: %float% - undisturbed gas temperature, K; \n
incident_radiation_temperature: %float% or null - temperature of the radiation entering the \n
        pre-shock region, K. null means radiation in equilibrium with the gas. \n

                                Regions \n
pre_shock_length: %float%, pre_shock_samples: %integer% - extent of the region ahead of the \n
        front, cm, and the number of output samples (at least 2); \n
post_shock_length: %float%, post_shock_samples: %integer% - the same behind the front. \n

                                Physics \n
model: \"RadiationHydro\" | \"Full\" - (T, E_r) flux-limited exchange, or (rho, v, T, E_r) \n
        closed-form cooling towards the upstream temperature; \n
opacity: \"ReferenceTable\" | \"Analytic\" | {\"AnalyticWith\": {\"kappa_break\": 0.1, \"T_break\": 150.0, \n
        \"T_decay\": 50.0}} | {\"Table\": {\"temperatures\": [...], \"opacities\": [...]}} \n
        Tables need strictly increasing temperatures; outside the table the edge segment is \n
        extrapolated linearly; \n
constants: \"Rounded\" | \"Precise\" | {\"Custom\": {\"c\": .., \"a_rad\": .., \"k_b\": .., \"m_h\": .., \n
        \"mu\": .., \"gamma\": ..}}; \n
limiter_regularization: %float% - epsilon in R = |grad E|/(kappa rho E_r + epsilon), default 1e-30; \n
preheating_threshold: %float% - smallest T_rad - T reported as preheating, K, default 5. \n

                                Solver \n
solver: {\"method\": \"Auto\" | \"Bdf\" | \"Radau\", \"rtol\": 1e-6, \"atol\": 1e-8, \n
        \"max_steps\": 100000, \"first_step\": null, \"max_step\": null} \n
        Auto picks Radau IIA for stiff regions (radiation out of equilibrium with the gas, \n
        full model) and BDF otherwise. max_steps bounds the step attempts of a whole region. Tolerances apply to the dimensionless \n
        variables T/T0, E_r/(a T0^4). \n
";
